use std::borrow::Cow;
use std::fmt;

use image::imageops::{self, FilterType};
use image::RgbaImage;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_OPACITY, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{MagicGridError, Result};
use crate::layout::{fit_within, DisplaySize};
use crate::source::SourceImage;

/// Image layer opacity in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct OpacitySpec(f32);

impl OpacitySpec {
    pub const OPAQUE: OpacitySpec = OpacitySpec(1.0);

    pub fn new(opacity: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(MagicGridError::InvalidOpacity(opacity));
        }
        Ok(Self(opacity))
    }

    /// Clamp slider input into range. NaN becomes fully transparent.
    pub fn clamped(opacity: f32) -> Self {
        if opacity.is_nan() {
            return Self(0.0);
        }
        Self(opacity.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f32 {
        self.0
    }

    fn scale_alpha(self, alpha: u8) -> u8 {
        (alpha as f32 * self.0).round() as u8
    }
}

impl Default for OpacitySpec {
    fn default() -> Self {
        Self(DEFAULT_OPACITY)
    }
}

impl TryFrom<f32> for OpacitySpec {
    type Error = MagicGridError;

    fn try_from(value: f32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<OpacitySpec> for f32 {
    fn from(spec: OpacitySpec) -> f32 {
        spec.0
    }
}

impl fmt::Display for OpacitySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Paint `image` scaled to `size` at `opacity` onto a cleared `surface`,
/// anchored at the top-left corner.
///
/// The scaled size is clamped to the surface with [`fit_within`], so a
/// display size larger than the surface never spills past its edges.
pub fn draw_image(surface: &mut RgbaImage, image: &SourceImage, size: DisplaySize, opacity: OpacitySpec) {
    let (surface_w, surface_h) = surface.dimensions();
    if surface_w == 0 || surface_h == 0 {
        return;
    }

    let placed = fit_within(size.width, size.height, surface_w as f64, surface_h as f64);
    let (target_w, target_h) = placed.pixel_dims();

    let scaled: Cow<'_, RgbaImage> = if (target_w, target_h) == (image.width(), image.height()) {
        Cow::Borrowed(image.pixels())
    } else {
        Cow::Owned(imageops::resize(image.pixels(), target_w, target_h, FilterType::Triangle))
    };

    let copy_w = target_w.min(surface_w) as usize;
    let copy_h = target_h.min(surface_h) as usize;
    let row_bytes = surface_w as usize * 4;

    let paint_row = |row: usize, dst: &mut [u8]| {
        if row >= copy_h {
            return;
        }
        for col in 0..copy_w {
            let src = scaled.get_pixel(col as u32, row as u32).0;
            let offset = col * 4;
            dst[offset..offset + 3].copy_from_slice(&src[..3]);
            dst[offset + 3] = opacity.scale_alpha(src[3]);
        }
    };

    if (surface_w as usize) * (surface_h as usize) >= PARALLEL_PIXEL_THRESHOLD {
        surface
            .par_chunks_mut(row_bytes)
            .enumerate()
            .for_each(|(row, dst)| paint_row(row, dst));
    } else {
        surface
            .chunks_mut(row_bytes)
            .enumerate()
            .for_each(|(row, dst)| paint_row(row, dst));
    }
}
