pub mod config;
pub mod info;
pub mod render;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use magicgrid_core::config::GridConfig;
use magicgrid_core::layout::ViewportBounds;

/// Display bounds shared by `info` and `render`.
#[derive(Args)]
pub struct BoundsArgs {
    /// Maximum display width in pixels
    #[arg(long, conflicts_with = "container_width")]
    pub max_width: Option<f64>,

    /// Derive the maximum width from a container width minus the configured gap
    #[arg(long)]
    pub container_width: Option<f64>,

    /// Maximum display height in pixels (defaults to the configured cap)
    #[arg(long)]
    pub max_height: Option<f64>,
}

impl BoundsArgs {
    /// Combine the flags with the config. Flags override the config, and any
    /// bound that is not a positive number is rejected.
    pub fn resolve(&self, config: &GridConfig) -> Result<ViewportBounds> {
        let max_height = self.max_height.unwrap_or(config.layout.max_height);
        let bounds = match (self.max_width, self.container_width) {
            (Some(w), _) => ViewportBounds::new(w, max_height),
            (None, Some(container)) => {
                ViewportBounds::try_from_container(container, config.layout.container_gap, max_height)?
            }
            (None, None) => ViewportBounds::new(ViewportBounds::default().max_width, max_height),
        };
        bounds.validate()?;
        Ok(bounds)
    }
}

/// Load a TOML config, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<GridConfig> {
    let Some(path) = path else {
        return Ok(GridConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: GridConfig = toml::from_str(&contents).context("Invalid grid config")?;
    config.validate()?;
    Ok(config)
}
