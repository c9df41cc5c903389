use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tracing::debug;

use crate::consts::IMAGE_MEDIA_PREFIX;
use crate::error::{MagicGridError, Result};

/// A decoded raster supplied by the user.
///
/// Immutable once decoded; a new load replaces it as a whole.
#[derive(Clone, Debug)]
pub struct SourceImage {
    pixels: RgbaImage,
    media_type: String,
}

impl SourceImage {
    /// Wrap already-decoded pixels. Fails on an empty raster.
    pub fn from_rgba(pixels: RgbaImage, media_type: impl Into<String>) -> Result<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(MagicGridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            pixels,
            media_type: media_type.into(),
        })
    }

    /// Decode an in-memory file.
    ///
    /// `media_type` is the type reported alongside the bytes (e.g. by a drop
    /// event). Anything outside `image/*` is rejected before decoding; an empty
    /// or missing type falls back to sniffing the bytes.
    pub fn decode(bytes: &[u8], media_type: Option<&str>) -> Result<Self> {
        let media_type = match media_type.filter(|m| !m.is_empty()) {
            Some(m) if is_image_media_type(m) => m.to_string(),
            Some(m) => return Err(MagicGridError::UnsupportedMediaType(m.to_string())),
            None => {
                let format = image::guess_format(bytes)
                    .map_err(|e| MagicGridError::Decode(e.to_string()))?;
                format.to_mime_type().to_string()
            }
        };

        let decoded = image::load_from_memory(bytes)
            .map_err(|e| MagicGridError::Decode(e.to_string()))?;
        debug!(
            media_type = %media_type,
            width = decoded.width(),
            height = decoded.height(),
            "decoded source image"
        );
        Self::from_rgba(decoded.to_rgba8(), media_type)
    }

    /// Read and decode a file. The media type comes from the extension when it
    /// names a raster format; otherwise the bytes are sniffed.
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::decode(&bytes, media_type_for_path(path))
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }
}

/// `true` for any `image/*` media type (case-insensitive).
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type
        .get(..IMAGE_MEDIA_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(IMAGE_MEDIA_PREFIX))
}

/// Media type implied by a file extension, if it names a raster format.
pub fn media_type_for_path(path: &Path) -> Option<&'static str> {
    ImageFormat::from_path(path)
        .ok()
        .map(|format| format.to_mime_type())
        .filter(|m| is_image_media_type(m))
}
