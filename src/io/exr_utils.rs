/* Copyright 2020 @TwoCookingMice */

use crate::math::bitmap::Bitmap;

use exr::prelude::*;

// Write a bitmap as a linear RGB OpenEXR image.
pub fn write_exr_to_file(image: &Bitmap, file_path: &str) -> std::result::Result<(), exr::error::Error> {
    log::info!("Starting writing openexr images: {}.", file_path);

    let width = image.width();
    write_rgb_file(file_path, width, image.height(), |x, y| {
        let p = image[(x, y)];
        (p.x, p.y, p.z)
    })?;

    log::info!("EXR written to: {}.", file_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::constants::Vector3f;

    #[test]
    fn test_write_exr_to_file() {
        let mut image = Bitmap::new(3, 2);
        image[(1, 1)] = Vector3f::new(2.0, 0.5, 0.25);
        let path = std::env::temp_dir().join("lumen_write_exr_test.exr");
        let path = path.to_string_lossy().to_string();

        write_exr_to_file(&image, &path).expect("exr written");
        let written = std::fs::metadata(&path).expect("file exists");
        assert!(written.len() > 0);
        let _ = std::fs::remove_file(&path);
    }
}
