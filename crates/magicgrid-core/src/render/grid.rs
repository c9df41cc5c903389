use std::fmt;
use std::ops::Range;

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_GRID_SPACING, GRID_LINE_COLOR, GRID_LINE_WIDTH};
use crate::error::{MagicGridError, Result};

/// Pixel spacing between grid lines. Always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct GridSpec(u32);

impl GridSpec {
    pub fn new(spacing: u32) -> Result<Self> {
        if spacing == 0 {
            return Err(MagicGridError::InvalidGridSpacing(spacing));
        }
        Ok(Self(spacing))
    }

    pub fn spacing(self) -> u32 {
        self.0
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self(DEFAULT_GRID_SPACING)
    }
}

impl TryFrom<u32> for GridSpec {
    type Error = MagicGridError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<GridSpec> for u32 {
    fn from(spec: GridSpec) -> u32 {
        spec.0
    }
}

impl fmt::Display for GridSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Coordinates of the grid lines along one axis: `0, s, 2s, ...` up to and
/// including `extent`.
pub fn grid_line_positions(extent: u32, spacing: GridSpec) -> Vec<u32> {
    (0..=extent).step_by(spacing.0 as usize).collect()
}

/// Stroke a grid onto `surface` with the fixed line style.
///
/// Vertical lines span the full height, horizontal lines the full width. A
/// line sitting on the far edge (`x == width`) lands on the last column.
pub fn draw_grid(surface: &mut RgbaImage, spacing: GridSpec) {
    let (width, height) = surface.dimensions();
    if width == 0 || height == 0 {
        return;
    }
    let color = Rgba(GRID_LINE_COLOR);

    for x in grid_line_positions(width, spacing) {
        for col in stroke_span(x, width, GRID_LINE_WIDTH) {
            for row in 0..height {
                surface.put_pixel(col, row, color);
            }
        }
    }

    for y in grid_line_positions(height, spacing) {
        for row in stroke_span(y, height, GRID_LINE_WIDTH) {
            for col in 0..width {
                surface.put_pixel(col, row, color);
            }
        }
    }
}

/// Pixel range covered by a line of `line_width` centred on `coord`, clamped
/// to `0..extent`.
fn stroke_span(coord: u32, extent: u32, line_width: u32) -> Range<u32> {
    let start = coord
        .saturating_sub(line_width / 2)
        .min(extent.saturating_sub(1));
    let end = start.saturating_add(line_width.max(1)).min(extent);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_spacing_rejected() {
        assert!(matches!(
            GridSpec::new(0),
            Err(MagicGridError::InvalidGridSpacing(0))
        ));
    }

    #[test]
    fn stroke_span_clamps_far_edge() {
        assert_eq!(stroke_span(0, 300, 1), 0..1);
        assert_eq!(stroke_span(100, 300, 1), 100..101);
        assert_eq!(stroke_span(300, 300, 1), 299..300);
    }

    #[test]
    fn wide_stroke_is_centred() {
        assert_eq!(stroke_span(10, 300, 3), 9..12);
        assert_eq!(stroke_span(0, 300, 3), 0..3);
    }
}
