use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::Result;

/// Save an RGBA raster as PNG.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save an RGBA raster, choosing the format from the file extension.
///
/// Unknown extensions fall back to PNG. Formats without an alpha channel
/// (e.g. JPEG) get the raster flattened to RGB first.
pub fn save_image(image: &RgbaImage, path: &Path) -> Result<()> {
    match ImageFormat::from_path(path) {
        Ok(ImageFormat::Jpeg) => {
            let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            rgb.save_with_format(path, ImageFormat::Jpeg)?;
            Ok(())
        }
        Ok(format) if format.writing_enabled() => {
            image.save_with_format(path, format)?;
            Ok(())
        }
        _ => save_png(image, path),
    }
}
