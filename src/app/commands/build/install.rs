//! Install stage: place the artifact and its desktop integration.
//!
//! Guarded by the single explicit check of the pipeline: the staged artifact
//! must exist. On that failure no descriptor file is written at all.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::{AppError, DesktopEntry, InstallManifest};
use crate::ports::{ConnectivityProbe, ToolRunner};

/// Final locations reported by a successful run.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub binary: PathBuf,
    pub menu_entry: PathBuf,
    pub autostart_entry: Option<PathBuf>,
    pub icon: PathBuf,
}

/// Verify the artifact, install it, and write the descriptor copies.
pub fn execute<R, P>(ctx: &AppContext<R, P>) -> Result<BuildOutcome, AppError>
where
    R: ToolRunner,
    P: ConnectivityProbe,
{
    let config = ctx.config();
    let layout = ctx.layout();
    let binary_name = &config.app.binary;

    let staged = layout.staged_artifact(binary_name);
    if !staged.exists() {
        return Err(AppError::ArtifactMissing { path: staged.display().to_string() });
    }

    let binary = layout.installed_binary(binary_name);
    fs::rename(&staged, &binary)?;
    fs::write(layout.marker_file(), format!("{}\n", binary_name))?;

    let icon = layout.icon_path(&config.app.icon_file);
    let entry = DesktopEntry {
        name: config.app.name.clone(),
        comment: config.app.comment.clone(),
        exec: binary.display().to_string(),
        icon: icon.display().to_string(),
        terminal: false,
        categories: config.install.categories.clone(),
        autostart_enabled: config.install.autostart,
    };
    let rendered = entry.render()?;

    let menu_entry = layout.menu_entry(binary_name);
    write_descriptor(&menu_entry, &rendered)?;

    let autostart_entry = if config.install.autostart {
        let path = layout.autostart_entry(binary_name);
        write_descriptor(&path, &rendered)?;
        Some(path)
    } else {
        None
    };

    let local_entry = layout.local_entry(binary_name);
    write_descriptor(&local_entry, &rendered)?;

    set_executable(&binary)?;
    set_executable(&menu_entry)?;
    if let Some(path) = &autostart_entry {
        set_executable(path)?;
    }
    set_executable(&local_entry)?;

    cleanup_staging(ctx)?;

    let mut manifest = InstallManifest::new(binary_name);
    manifest.record(&binary)?;
    manifest.record(&menu_entry)?;
    if let Some(path) = &autostart_entry {
        manifest.record(path)?;
    }
    manifest.record(&local_entry)?;
    manifest.record(&icon)?;
    manifest.save(&layout.manifest_file())?;

    println!("Installed binary: {}", binary.display());
    println!("Menu entry: {}", menu_entry.display());
    if let Some(path) = &autostart_entry {
        println!("Autostart entry: {}", path.display());
    }
    println!("Icon: {}", icon.display());

    Ok(BuildOutcome { binary, menu_entry, autostart_entry, icon })
}

fn write_descriptor(path: &Path, content: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<(), AppError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<(), AppError> {
    Ok(())
}

/// Drop the freeze tool's transient outputs.
fn cleanup_staging<R, P>(ctx: &AppContext<R, P>) -> Result<(), AppError>
where
    R: ToolRunner,
    P: ConnectivityProbe,
{
    let build_dir = ctx.layout().build_dir();
    if build_dir.exists() {
        fs::remove_dir_all(&build_dir)?;
    }
    let dist_dir = ctx.layout().dist_dir();
    if dist_dir.exists() {
        fs::remove_dir_all(&dist_dir)?;
    }
    let spec_file = ctx.layout().spec_file(&ctx.config().app.binary);
    if spec_file.exists() {
        fs::remove_file(&spec_file)?;
    }
    Ok(())
}
