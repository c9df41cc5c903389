mod common;

use std::io::Write;

use magicgrid_core::error::MagicGridError;
use magicgrid_core::source::SourceImage;

use common::{png_bytes, solid_rgba};

#[test]
fn test_decode_png_with_media_type() {
    let bytes = png_bytes(&solid_rgba(7, 5, [10, 20, 30, 255]));
    let image = SourceImage::decode(&bytes, Some("image/png")).unwrap();
    assert_eq!((image.width(), image.height()), (7, 5));
    assert_eq!(image.pixels().get_pixel(3, 3).0, [10, 20, 30, 255]);
}

#[test]
fn test_decode_sniffs_missing_media_type() {
    let bytes = png_bytes(&solid_rgba(4, 4, [0, 0, 0, 255]));
    let image = SourceImage::decode(&bytes, None).unwrap();
    assert_eq!(image.media_type(), "image/png");

    let image = SourceImage::decode(&bytes, Some("")).unwrap();
    assert_eq!(image.media_type(), "image/png");
}

#[test]
fn test_decode_rejects_non_image_type() {
    let bytes = png_bytes(&solid_rgba(4, 4, [0, 0, 0, 255]));
    let err = SourceImage::decode(&bytes, Some("application/pdf")).unwrap_err();
    assert!(matches!(err, MagicGridError::UnsupportedMediaType(ref m) if m == "application/pdf"));
}

#[test]
fn test_decode_garbage_fails() {
    let err = SourceImage::decode(b"definitely not pixels", Some("image/jpeg")).unwrap_err();
    assert!(matches!(err, MagicGridError::Decode(_)));

    let err = SourceImage::decode(b"definitely not pixels", None).unwrap_err();
    assert!(matches!(err, MagicGridError::Decode(_)));
}

#[test]
fn test_from_rgba_rejects_empty() {
    let err = SourceImage::from_rgba(image::RgbaImage::new(0, 3), "image/png").unwrap_err();
    assert!(matches!(
        err,
        MagicGridError::InvalidDimensions { width: 0, height: 3 }
    ));
}

#[test]
fn test_open_png_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("photo.png");
    solid_rgba(12, 9, [5, 6, 7, 255]).save(&path).unwrap();

    let image = SourceImage::open(&path).unwrap();
    assert_eq!((image.width(), image.height()), (12, 9));
    assert_eq!(image.media_type(), "image/png");
}

#[test]
fn test_open_text_file_fails() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all(b"hello").unwrap();
    file.flush().unwrap();

    let err = SourceImage::open(file.path()).unwrap_err();
    assert!(matches!(err, MagicGridError::Decode(_)));
}

#[test]
fn test_open_sniffs_file_without_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scan");
    std::fs::write(&path, png_bytes(&solid_rgba(7, 5, [1, 2, 3, 255]))).unwrap();

    let image = SourceImage::open(&path).unwrap();
    assert_eq!((image.width(), image.height()), (7, 5));
    assert_eq!(image.media_type(), "image/png");
}

#[test]
fn test_open_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SourceImage::open(&dir.path().join("absent.png")).unwrap_err();
    assert!(matches!(err, MagicGridError::Io(_)));
}
