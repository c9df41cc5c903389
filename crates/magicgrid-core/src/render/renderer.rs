use image::RgbaImage;
use tracing::debug;

use crate::layout::DisplaySize;
use crate::source::SourceImage;

use super::blend::composite_over;
use super::grid::{draw_grid, GridSpec};
use super::image_layer::{draw_image, OpacitySpec};
use super::surface::{LayerKind, RenderLayer};

/// Two stacked surfaces of identical size: the image layer beneath the grid
/// layer. Each is redrawn on its own; drawing one never touches the other.
#[derive(Clone, Debug)]
pub struct LayeredRenderer {
    size: Option<DisplaySize>,
    image_layer: RenderLayer,
    grid_layer: RenderLayer,
}

impl Default for LayeredRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl LayeredRenderer {
    pub fn new() -> Self {
        Self {
            size: None,
            image_layer: RenderLayer::new(LayerKind::Image),
            grid_layer: RenderLayer::new(LayerKind::Grid),
        }
    }

    /// Size both layers to `size` and clear them.
    pub fn initialize(&mut self, size: DisplaySize) {
        let (width, height) = size.pixel_dims();
        self.image_layer.resize(width, height);
        self.grid_layer.resize(width, height);
        self.size = Some(size);
        debug!(width, height, "layers initialized");
    }

    pub fn is_initialized(&self) -> bool {
        self.size.is_some()
    }

    pub fn size(&self) -> Option<DisplaySize> {
        self.size
    }

    /// Clear the image layer and paint `image` scaled to `size` at `opacity`.
    pub fn draw_image_layer(&mut self, image: &SourceImage, size: DisplaySize, opacity: OpacitySpec) {
        self.image_layer.clear();
        let Some(surface) = self.image_layer.surface_mut() else {
            debug!("image layer draw skipped, renderer not initialized");
            return;
        };
        draw_image(surface, image, size, opacity);
        debug!(opacity = opacity.value(), "image layer redrawn");
    }

    /// Clear the grid layer and stroke a grid at `spacing`.
    ///
    /// The grid covers the whole layer; `size` only has to agree with the size
    /// passed to [`LayeredRenderer::initialize`].
    pub fn draw_grid_layer(&mut self, size: DisplaySize, spacing: GridSpec) {
        debug_assert!(self.size.map_or(true, |s| s.pixel_dims() == size.pixel_dims()));
        self.grid_layer.clear();
        let Some(surface) = self.grid_layer.surface_mut() else {
            debug!("grid layer draw skipped, renderer not initialized");
            return;
        };
        draw_grid(surface, spacing);
        debug!(spacing = spacing.spacing(), "grid layer redrawn");
    }

    pub fn layer(&self, kind: LayerKind) -> &RenderLayer {
        match kind {
            LayerKind::Image => &self.image_layer,
            LayerKind::Grid => &self.grid_layer,
        }
    }

    /// Flatten the grid layer over the image layer into a single raster.
    pub fn composite(&self) -> Option<RgbaImage> {
        let mut out = self.image_layer.surface()?.clone();
        let grid = self.grid_layer.surface()?;
        composite_over(&mut out, grid);
        Some(out)
    }
}
