use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use crate::domain::AppError;

/// Encode a tightly packed RGBA8 buffer as a PNG file, creating parent
/// directories as needed. Overwrites any existing file.
pub fn write_rgba_png(path: &Path, width: u32, height: u32, pixels: &[u8]) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(pixels)?;
    Ok(())
}
