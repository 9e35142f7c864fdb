//! Status: read-mostly health report over the environment and the install.
//!
//! Mirrors the checks the build pipeline performs, without mutating anything:
//! environment health and importability, artifact presence, and manifest
//! consistency.

use std::path::Path;

use crate::app::commands::build::environment::{self, EnvHealth};
use crate::app::AppContext;
use crate::domain::{manifest, AppError, InstallManifest};
use crate::ports::{ConnectivityProbe, ToolRunner};

/// Result of a status run.
#[derive(Debug, Clone)]
pub struct StatusOutcome {
    pub problems: usize,
    pub exit_code: i32,
}

/// Report health and return the number of problems found.
pub fn execute<R, P>(ctx: &AppContext<R, P>) -> Result<StatusOutcome, AppError>
where
    R: ToolRunner,
    P: ConnectivityProbe,
{
    let config = ctx.config();
    let layout = ctx.layout();
    let mut problems = 0;

    let env_dir = layout.env_dir(&config.environment.dir);
    let python = layout.env_python(&config.environment.dir);
    match environment::inspect(&env_dir, &python) {
        EnvHealth::Missing => {
            println!("environment: missing");
            problems += 1;
        }
        EnvHealth::Corrupt => {
            println!("environment: corrupt (runtime not executable)");
            problems += 1;
        }
        EnvHealth::Ready => {
            let missing = environment::missing_modules(
                ctx.runner(),
                &python,
                &config.environment.capability_modules,
                layout.root(),
            );
            if missing.is_empty() {
                println!("environment: ready");
            } else {
                println!("environment: degraded (missing {})", missing.join(", "));
                problems += 1;
            }
        }
    }

    let binary = layout.installed_binary(&config.app.binary);
    if binary.exists() {
        println!("binary: installed at {}", binary.display());
    } else {
        println!("binary: not installed");
        problems += 1;
    }

    let manifest_path = layout.manifest_file();
    if manifest_path.exists() {
        let manifest = InstallManifest::load(&manifest_path)?;
        let mut intact = true;
        for entry in &manifest.files {
            let path = Path::new(&entry.path);
            if !path.exists() {
                println!("missing: {}", path.display());
                problems += 1;
                intact = false;
                continue;
            }
            match manifest::hash_file(path) {
                Ok(digest) if digest == entry.sha256 => {}
                _ => {
                    println!("modified: {}", path.display());
                    problems += 1;
                    intact = false;
                }
            }
        }
        if intact {
            println!("install manifest: ok ({} files)", manifest.files.len());
        }
    } else {
        println!("install manifest: not found");
        problems += 1;
    }

    if problems == 0 {
        println!("All checks passed.");
    } else {
        eprintln!("Check failed: {} problem(s) found.", problems);
    }

    Ok(StatusOutcome { problems, exit_code: if problems > 0 { 1 } else { 0 } })
}
