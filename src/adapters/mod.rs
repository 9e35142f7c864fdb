//! Adapters: concrete implementations of the ports plus small I/O helpers.

mod png_writer;
mod probe;
mod process;

pub use png_writer::write_rgba_png;
pub use probe::HttpProbe;
pub use process::SystemToolRunner;
