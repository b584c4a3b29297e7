/* Copyright 2020 @TwoCookingMice */

pub mod exr_utils;
pub mod image_utils;

use crate::math::bitmap::Bitmap;
use crate::renderers::renderer::RenderError;

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Exr,
    Png,
}

impl OutputFormat {
    /// Format named by the path's extension, case-insensitively.
    pub fn from_path(file_path: &str) -> Result<Self, RenderError> {
        let extension = Path::new(file_path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("exr") => Ok(OutputFormat::Exr),
            Some("png") => Ok(OutputFormat::Png),
            _ => Err(RenderError::UnsupportedFormat(file_path.to_string())),
        }
    }
}

/// Writes the bitmap as linear `.exr` or clamped 8-bit `.png`, following
/// the path's extension.
pub fn write_image(bitmap: &Bitmap, file_path: &str) -> Result<(), RenderError> {
    match OutputFormat::from_path(file_path)? {
        OutputFormat::Exr => Ok(exr_utils::write_exr_to_file(bitmap, file_path)?),
        OutputFormat::Png => Ok(image_utils::write_png_to_file(bitmap, file_path)?),
    }
}
