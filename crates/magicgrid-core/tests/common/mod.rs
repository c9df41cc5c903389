#![allow(dead_code)]

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use magicgrid_core::source::SourceImage;

/// Build an RGBA image filled with a single colour.
pub fn solid_rgba(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}

/// Build a source image filled with a single colour.
pub fn solid_source(width: u32, height: u32, color: [u8; 4]) -> SourceImage {
    SourceImage::from_rgba(solid_rgba(width, height, color), "image/png").expect("non-empty raster")
}

/// Encode an RGBA image as PNG bytes in memory.
pub fn png_bytes(image: &RgbaImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .expect("encode PNG");
    buf.into_inner()
}

/// Relative difference between two positive values.
pub fn rel_diff(a: f64, b: f64) -> f64 {
    (a - b).abs() / a.abs().max(b.abs())
}
