//! Icon generation stage.

use crate::adapters::write_rgba_png;
use crate::app::AppContext;
use crate::domain::icon::{render_icon, ICON_SIZE};
use crate::domain::AppError;
use crate::ports::{ConnectivityProbe, ToolRunner};

/// Render the application icon to its canonical path. Unconditional,
/// deterministic overwrite.
pub fn execute<R, P>(ctx: &AppContext<R, P>) -> Result<(), AppError>
where
    R: ToolRunner,
    P: ConnectivityProbe,
{
    let path = ctx.layout().icon_path(&ctx.config().app.icon_file);
    println!("Rendering application icon to {}", path.display());

    let pixels = render_icon();
    write_rgba_png(&path, ICON_SIZE, ICON_SIZE, &pixels)
}
