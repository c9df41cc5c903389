use thiserror::Error;

#[derive(Error, Debug)]
pub enum MagicGridError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Grid spacing must be at least 1 pixel (got {0})")]
    InvalidGridSpacing(u32),

    #[error("Opacity must be within 0.0..=1.0 (got {0})")]
    InvalidOpacity(f32),

    #[error("Invalid display bounds: {0}")]
    InvalidBounds(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, MagicGridError>;
