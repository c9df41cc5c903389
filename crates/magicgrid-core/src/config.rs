use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CONTAINER_GAP, DEFAULT_GRID_SPACING, DEFAULT_GRID_SPACING_MAX, DEFAULT_MAX_DISPLAY_HEIGHT,
    DEFAULT_OPACITY,
};
use crate::error::{MagicGridError, Result};
use crate::layout::ViewportBounds;
use crate::render::{GridSpec, OpacitySpec};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default)]
    pub controls: ControlsConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

/// Initial values and ranges of the user controls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub grid_spacing: u32,
    pub grid_spacing_max: u32,
    pub opacity: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            grid_spacing: DEFAULT_GRID_SPACING,
            grid_spacing_max: DEFAULT_GRID_SPACING_MAX,
            opacity: DEFAULT_OPACITY,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height cap for the composed layers, in pixels.
    pub max_height: f64,
    /// Subtracted from the container width to get the maximum display width.
    pub container_gap: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_height: DEFAULT_MAX_DISPLAY_HEIGHT,
            container_gap: DEFAULT_CONTAINER_GAP,
        }
    }
}

impl LayoutConfig {
    pub fn bounds_for_container(&self, container_width: f64) -> ViewportBounds {
        ViewportBounds::from_container(container_width, self.container_gap, self.max_height)
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<()> {
        let controls = &self.controls;
        GridSpec::new(controls.grid_spacing)?;
        if controls.grid_spacing_max < controls.grid_spacing {
            return Err(MagicGridError::InvalidConfig(format!(
                "grid_spacing_max ({}) is below grid_spacing ({})",
                controls.grid_spacing_max, controls.grid_spacing
            )));
        }
        OpacitySpec::new(controls.opacity)?;

        let max_height = self.layout.max_height;
        if max_height.is_nan() || max_height <= 0.0 {
            return Err(MagicGridError::InvalidConfig(format!(
                "max_height must be positive (got {max_height})"
            )));
        }
        let gap = self.layout.container_gap;
        if gap.is_nan() || gap < 0.0 {
            return Err(MagicGridError::InvalidConfig(format!(
                "container_gap must not be negative (got {gap})"
            )));
        }
        Ok(())
    }

    pub fn grid_spec(&self) -> Result<GridSpec> {
        GridSpec::new(self.controls.grid_spacing)
    }

    pub fn opacity_spec(&self) -> Result<OpacitySpec> {
        OpacitySpec::new(self.controls.opacity)
    }
}
