//! Packaging stage: freeze the application into a single executable.

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{ConnectivityProbe, ToolRunner};

/// Invoke the freeze tool against the entry point.
///
/// The tool's exit status is deliberately not inspected: success is judged
/// from filesystem evidence alone, by the installer checking that
/// `dist/<binary>` exists. Keep it that way; the tool's status codes are not
/// a reliable signal across versions.
pub fn execute<R, P>(ctx: &AppContext<R, P>) -> Result<(), AppError>
where
    R: ToolRunner,
    P: ConnectivityProbe,
{
    let app = &ctx.config().app;
    let pyinstaller = ctx.layout().env_pyinstaller(&ctx.config().environment.dir);

    println!("Packaging {} from {}", app.binary, app.entry_point);
    ctx.runner().run_unchecked(
        &pyinstaller,
        &["--onefile", "--windowed", "--name", &app.binary, &app.entry_point],
        ctx.layout().root(),
    );

    Ok(())
}
