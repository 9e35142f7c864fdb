//! traypack: build and install pipeline for the VPN Monitor tray application.
//!
//! One sequential pipeline: prepare the workspace, resolve the isolated
//! build environment, render the icon, freeze the application into a single
//! executable, and install the desktop integration.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

use std::path::PathBuf;
use std::time::Duration;

use adapters::{HttpProbe, SystemToolRunner};
use app::{
    commands::{build, status, uninstall},
    AppContext,
};
use domain::{BuildConfig, InstallLayout};

pub use app::commands::build::BuildOutcome;
pub use app::commands::status::StatusOutcome;
pub use app::commands::uninstall::UninstallOutcome;
pub use domain::AppError;

fn context(
    root: Option<PathBuf>,
) -> Result<AppContext<SystemToolRunner, HttpProbe>, AppError> {
    let layout = InstallLayout::resolve(root)?;
    let config = BuildConfig::load(layout.root())?;
    let probe = HttpProbe::new(
        &config.environment.probe_url,
        Duration::from_secs(config.environment.probe_timeout_secs),
    )?;
    Ok(AppContext::new(config, layout, SystemToolRunner::new(), probe))
}

/// Run the full build and install pipeline in the working root.
pub fn build(root: Option<PathBuf>) -> Result<BuildOutcome, AppError> {
    let ctx = context(root)?;
    let outcome = build::execute(&ctx)?;
    println!("✅ Build complete");
    Ok(outcome)
}

/// Remove everything the last successful build installed.
pub fn uninstall(root: Option<PathBuf>) -> Result<UninstallOutcome, AppError> {
    let layout = InstallLayout::resolve(root)?;
    let outcome = uninstall::execute(&layout)?;
    println!("✅ Uninstalled {} file(s)", outcome.removed);
    Ok(outcome)
}

/// Report environment and install health without mutating anything.
pub fn status(root: Option<PathBuf>) -> Result<StatusOutcome, AppError> {
    let ctx = context(root)?;
    status::execute(&ctx)
}
