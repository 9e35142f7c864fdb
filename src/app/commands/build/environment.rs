//! Environment resolution: reuse, heal, or recreate the isolated build
//! environment.
//!
//! A present-but-corrupt environment (runtime missing or not executable) is
//! deleted and rebuilt without user interaction. A present environment with
//! missing capability modules is still reused: the gap is logged, not healed.
//! Only environment creation itself is allowed to fail the pipeline here.

use std::fs;
use std::path::Path;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{ConnectivityProbe, ToolRunner};

/// Health of the environment directory, judged from filesystem evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EnvHealth {
    /// Directory absent; a fresh environment is needed.
    Missing,
    /// Directory present but its runtime interpreter is not executable.
    Corrupt,
    /// Runtime present and executable.
    Ready,
}

/// Judge the environment without running anything.
pub(crate) fn inspect(env_dir: &Path, python: &Path) -> EnvHealth {
    if !env_dir.exists() {
        return EnvHealth::Missing;
    }
    if !is_executable(python) {
        return EnvHealth::Corrupt;
    }
    EnvHealth::Ready
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match fs::metadata(path) {
        Ok(metadata) => metadata.is_file() && metadata.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Probe which capability modules the environment cannot import.
pub(crate) fn missing_modules<R: ToolRunner>(
    runner: &R,
    python: &Path,
    modules: &[String],
    cwd: &Path,
) -> Vec<String> {
    modules
        .iter()
        .filter(|module| {
            let statement = format!("import {}", module);
            !runner.run_unchecked(python, &["-c", &statement], cwd)
        })
        .cloned()
        .collect()
}

/// Resolve the build environment, leaving it ready for packaging.
pub fn execute<R, P>(ctx: &AppContext<R, P>) -> Result<(), AppError>
where
    R: ToolRunner,
    P: ConnectivityProbe,
{
    let root = ctx.layout().root();
    let env_settings = &ctx.config().environment;
    let env_dir = ctx.layout().env_dir(&env_settings.dir);
    let python = ctx.layout().env_python(&env_settings.dir);

    match inspect(&env_dir, &python) {
        health @ (EnvHealth::Missing | EnvHealth::Corrupt) => {
            if health == EnvHealth::Corrupt {
                println!("Environment runtime is not executable; recreating");
                fs::remove_dir_all(&env_dir)?;
            }
            println!("Creating build environment at {}", env_dir.display());
            let env_arg = env_dir
                .to_str()
                .ok_or_else(|| AppError::config_error("Environment path is not valid UTF-8"))?;
            ctx.runner()
                .run_checked(Path::new("python3"), &["-m", "venv", env_arg], root)
                .map_err(|err| AppError::EnvironmentCreateFailed { details: err.to_string() })?;

            println!("Installing dependencies: {}", env_settings.packages.join(", "));
            let pip = ctx.layout().env_pip(&env_settings.dir);
            let mut args = vec!["install"];
            args.extend(env_settings.packages.iter().map(String::as_str));
            // Install failures surface later as missing modules or a missing
            // artifact; the exit status is not inspected.
            ctx.runner().run_unchecked(&pip, &args, root);
        }
        EnvHealth::Ready => {
            println!("Reusing existing build environment");
            for module in
                missing_modules(ctx.runner(), &python, &env_settings.capability_modules, root)
            {
                println!(
                    "Warning: module '{}' not importable; continuing with existing environment",
                    module
                );
            }

            if ctx.probe().is_reachable() {
                println!("Checking for dependency updates");
                let pip = ctx.layout().env_pip(&env_settings.dir);
                let mut args = vec!["install", "--upgrade", "--quiet"];
                args.extend(env_settings.packages.iter().map(String::as_str));
                ctx.runner().run_unchecked(&pip, &args, root);
            }
        }
    }

    Ok(())
}
