use std::fmt;

use image::{Rgba, RgbaImage};

/// Which of the two stacked surfaces a layer is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Image,
    Grid,
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerKind::Image => write!(f, "image-layer"),
            LayerKind::Grid => write!(f, "grid-layer"),
        }
    }
}

/// A drawable RGBA surface. Unsized until [`RenderLayer::resize`] is called.
#[derive(Clone, Debug)]
pub struct RenderLayer {
    kind: LayerKind,
    surface: Option<RgbaImage>,
}

impl RenderLayer {
    pub fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            surface: None,
        }
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    /// Reallocate the surface at `width` x `height`, fully transparent.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface = Some(RgbaImage::new(width, height));
    }

    /// Reset every pixel to transparent. No-op on an unsized layer.
    pub fn clear(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            for pixel in surface.pixels_mut() {
                *pixel = Rgba([0, 0, 0, 0]);
            }
        }
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.surface.as_ref().map(|s| s.dimensions())
    }

    pub fn surface(&self) -> Option<&RgbaImage> {
        self.surface.as_ref()
    }

    pub(crate) fn surface_mut(&mut self) -> Option<&mut RgbaImage> {
        self.surface.as_mut()
    }
}
