pub mod blend;
pub mod grid;
pub mod image_layer;
pub mod renderer;
pub mod surface;

pub use grid::{grid_line_positions, GridSpec};
pub use image_layer::OpacitySpec;
pub use renderer::LayeredRenderer;
pub use surface::{LayerKind, RenderLayer};
