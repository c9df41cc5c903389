/// Minimum pixel count (w*h) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Default grid spacing in pixels.
pub const DEFAULT_GRID_SPACING: u32 = 50;

/// Default upper bound of the grid spacing control.
pub const DEFAULT_GRID_SPACING_MAX: u32 = 500;

/// Default image layer opacity.
pub const DEFAULT_OPACITY: f32 = 1.0;

/// Maximum display height, independent of the container.
pub const DEFAULT_MAX_DISPLAY_HEIGHT: f64 = 1000.0;

/// Gap subtracted from the container width when deriving the maximum display width.
pub const DEFAULT_CONTAINER_GAP: f64 = 16.0;

/// Grid stroke colour (#888888, opaque).
pub const GRID_LINE_COLOR: [u8; 4] = [0x88, 0x88, 0x88, 0xff];

/// Grid stroke width in pixels.
pub const GRID_LINE_WIDTH: u32 = 1;

/// Media type prefix accepted as a raster image.
pub const IMAGE_MEDIA_PREFIX: &str = "image/";
