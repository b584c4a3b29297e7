// Copyright @yucwang 2026

use crate::math::bitmap::Bitmap;

use image::{ImageFormat, RgbImage};

/// Writes a display copy of the bitmap as PNG: channels clamped to [0, 1]
/// and scaled to 8 bits.
pub fn write_png_to_file(bitmap: &Bitmap, file_path: &str) -> Result<(), image::ImageError> {
    log::info!("Starting writing 8-bit image: {}.", file_path);

    let buffer = RgbImage::from_raw(bitmap.width() as u32, bitmap.height() as u32, bitmap.to_rgb8())
        .ok_or_else(|| image::ImageError::Parameter(image::error::ParameterError::from_kind(
            image::error::ParameterErrorKind::DimensionMismatch)))?;
    buffer.save_with_format(file_path, ImageFormat::Png)?;

    log::info!("Image written to: {}.", file_path);
    Ok(())
}
