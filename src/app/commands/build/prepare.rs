//! Workspace preparation: purge leftovers from prior builds.

use std::fs;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{ConnectivityProbe, ToolRunner};

/// Remove transient outputs of a previous run. Missing paths are fine.
pub fn execute<R, P>(ctx: &AppContext<R, P>) -> Result<(), AppError>
where
    R: ToolRunner,
    P: ConnectivityProbe,
{
    println!("Preparing workspace at {}", ctx.layout().root().display());

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
