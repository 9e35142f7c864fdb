//! The build pipeline: prepare, resolve environment, render icon, package,
//! install.
//!
//! Strictly sequential; each stage's success gates the next and nothing is
//! retried. There is no locking, so concurrent runs against the same working
//! root are unsupported.

pub(crate) mod environment;
mod icon;
mod install;
mod package;
mod prepare;

pub use install::BuildOutcome;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{ConnectivityProbe, ToolRunner};

/// Execute the full pipeline.
pub fn execute<R, P>(ctx: &AppContext<R, P>) -> Result<BuildOutcome, AppError>
where
    R: ToolRunner,
    P: ConnectivityProbe,
{
    prepare::execute(ctx)?;
    environment::execute(ctx)?;
    icon::execute(ctx)?;
    package::execute(ctx)?;
    install::execute(ctx)
}
