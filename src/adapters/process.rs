use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::ToolRunner;

/// `std::process::Command`-based tool runner.
#[derive(Debug, Clone, Default)]
pub struct SystemToolRunner;

impl SystemToolRunner {
    pub fn new() -> Self {
        Self
    }
}

fn command_line(program: &Path, args: &[&str]) -> String {
    format!("{} {}", program.display(), args.join(" "))
}

impl ToolRunner for SystemToolRunner {
    fn run_checked(&self, program: &Path, args: &[&str], cwd: &Path) -> Result<(), AppError> {
        let output = Command::new(program).args(args).current_dir(cwd).output().map_err(|e| {
            AppError::ToolFailed { command: command_line(program, args), details: e.to_string() }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::ToolFailed {
                command: command_line(program, args),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(())
    }

    fn run_unchecked(&self, program: &Path, args: &[&str], cwd: &Path) -> bool {
        // Inherited stdio: the tool's own progress output stays visible.
        Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}
