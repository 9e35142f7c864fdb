use std::path::Path;

use crate::domain::AppError;

/// Port for invoking external build tools.
pub trait ToolRunner {
    /// Run a tool and fail if it cannot be spawned or exits non-zero.
    fn run_checked(&self, program: &Path, args: &[&str], cwd: &Path) -> Result<(), AppError>;

    /// Run a tool for its side effects only.
    ///
    /// Spawn failures and non-zero exits are reported in the return value,
    /// never as errors. Callers that need a success criterion must check
    /// filesystem evidence instead.
    fn run_unchecked(&self, program: &Path, args: &[&str], cwd: &Path) -> bool;
}
