use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CONTAINER_GAP, DEFAULT_MAX_DISPLAY_HEIGHT};
use crate::error::{MagicGridError, Result};

/// On-screen size chosen for the composed layers.
///
/// Fractional values are kept so the aspect ratio survives until the surfaces
/// are actually allocated (see [`DisplaySize::pixel_dims`]).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplaySize {
    pub width: f64,
    pub height: f64,
}

impl DisplaySize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Surface dimensions in whole pixels. Fractions are truncated, the same
    /// way a drawing surface truncates a fractional width, but never below 1.
    pub fn pixel_dims(&self) -> (u32, u32) {
        let w = (self.width as u32).max(1);
        let h = (self.height as u32).max(1);
        (w, h)
    }
}

/// Largest display area available for the composed layers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    pub max_width: f64,
    pub max_height: f64,
}

impl ViewportBounds {
    pub fn new(max_width: f64, max_height: f64) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// Bounds for a hosting container: its width minus the layout gap, with a
    /// fixed height cap. The width never drops below one pixel.
    pub fn from_container(container_width: f64, gap: f64, max_height: f64) -> Self {
        Self {
            max_width: (container_width - gap).max(1.0),
            max_height,
        }
    }

    /// Like [`ViewportBounds::from_container`], but rejects a container that
    /// leaves no room once the gap is taken off instead of clamping it.
    pub fn try_from_container(container_width: f64, gap: f64, max_height: f64) -> Result<Self> {
        if !container_width.is_finite() || container_width <= gap {
            return Err(MagicGridError::InvalidBounds(format!(
                "container width must exceed the {gap} px gap (got {container_width})"
            )));
        }
        let bounds = Self::new(container_width - gap, max_height);
        bounds.validate()?;
        Ok(bounds)
    }

    /// Both bounds must be finite and positive before [`fit`] may use them.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("max_width", self.max_width), ("max_height", self.max_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MagicGridError::InvalidBounds(format!(
                    "{name} must be a positive number (got {value})"
                )));
            }
        }
        Ok(())
    }

    pub fn fit(&self, natural_width: f64, natural_height: f64) -> DisplaySize {
        fit(natural_width, natural_height, self.max_width, self.max_height)
    }
}

impl Default for ViewportBounds {
    fn default() -> Self {
        Self::from_container(
            DEFAULT_MAX_DISPLAY_HEIGHT + DEFAULT_CONTAINER_GAP,
            DEFAULT_CONTAINER_GAP,
            DEFAULT_MAX_DISPLAY_HEIGHT,
        )
    }
}

/// Fit a natural size inside `max_width` x `max_height`, preserving aspect ratio.
///
/// Images that already fit are returned unchanged (no upscaling). When both
/// axes overflow, the axis with the larger overflow ratio binds; on a tie the
/// height binds. All inputs must be positive.
pub fn fit(natural_width: f64, natural_height: f64, max_width: f64, max_height: f64) -> DisplaySize {
    debug_assert!(natural_width > 0.0 && natural_height > 0.0);
    debug_assert!(max_width > 0.0 && max_height > 0.0);

    let width_over = natural_width > max_width;
    let height_over = natural_height > max_height;

    if !width_over && !height_over {
        return DisplaySize::new(natural_width, natural_height);
    }

    let ratio = natural_width / natural_height;
    let bind_width = if width_over && height_over {
        natural_width / max_width > natural_height / max_height
    } else {
        width_over
    };

    if bind_width {
        DisplaySize::new(max_width, (max_width / ratio).min(max_height))
    } else {
        DisplaySize::new((max_height * ratio).min(max_width), max_height)
    }
}

/// Place a natural size onto a container that has already been fit.
///
/// Shrinks an oversized image to the container (width first, then height is
/// rechecked) and leaves an undersized one at its natural size.
pub fn fit_within(
    natural_width: f64,
    natural_height: f64,
    container_width: f64,
    container_height: f64,
) -> DisplaySize {
    debug_assert!(natural_width > 0.0 && natural_height > 0.0);

    let mut width = natural_width;
    let mut height = natural_height;

    if natural_width > container_width {
        width = container_width;
        height = natural_height / natural_width * width;
    }

    if height > container_height {
        height = container_height;
        width = natural_width / natural_height * height;
    }

    DisplaySize::new(width, height)
}
