//! Image loading and thumbnail scaling
//!
//! Decoding is delegated entirely to the `image` crate; anything it can
//! parse (JPEG, PNG, GIF, WebP, TIFF, BMP, ...) works here. Images can come
//! from a file path or an in-memory byte buffer. Before sampling, images are
//! scaled down to a thumbnail bound so the distinct-color population, and
//! with it the clustering cost, stays small.

use crate::constants::sampling::THUMB_SIZE;
use crate::error::{PaletteError, Result};
use image::{DynamicImage, ImageReader};
use std::io::Cursor;
use std::path::Path;

/// Load and decode an image from a file
///
/// The format is sniffed from the file content, not the extension.
///
/// # Errors
///
/// Returns `PaletteError::Decode` if the file cannot be opened or parsed.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path).map_err(|e| {
        PaletteError::decode(format!("Failed to open image file: {}", path.display()), e)
    })?;

    reader.decode().map_err(|e| {
        PaletteError::decode(format!("Failed to decode image: {}", path.display()), e)
    })
}

/// Decode an image from an in-memory encoded byte buffer
///
/// # Errors
///
/// Returns `PaletteError::Decode` if the bytes are not a recognizable image.
pub fn load_from_memory(bytes: &[u8]) -> Result<DynamicImage> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| PaletteError::decode("Failed to sniff image format", e))?;

    reader
        .decode()
        .map_err(|e| PaletteError::decode("Failed to decode image from memory", e))
}

/// Scale an image down to fit within the thumbnail bound
///
/// Aspect ratio is preserved. Images already within the bound are returned
/// unchanged; nothing is ever upscaled.
pub fn thumbnail(image: &DynamicImage) -> DynamicImage {
    if image.width() <= THUMB_SIZE && image.height() <= THUMB_SIZE {
        return image.clone();
    }
    image.thumbnail(THUMB_SIZE, THUMB_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};

    fn encode_png(img: &RgbImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(img.clone())
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_load_image_missing_file() {
        let err = load_image(Path::new("nonexistent_file.png")).unwrap_err();
        assert!(matches!(err, PaletteError::Decode { .. }));
    }

    #[test]
    fn test_load_from_memory_roundtrip() {
        let img = RgbImage::from_pixel(3, 3, Rgb([200, 0, 0]));
        let decoded = load_from_memory(&encode_png(&img)).unwrap();
        assert_eq!(decoded.width(), 3);
        assert_eq!(decoded.to_rgb8().get_pixel(1, 1), &Rgb([200, 0, 0]));
    }

    #[test]
    fn test_load_from_memory_garbage() {
        let err = load_from_memory(b"definitely not an image").unwrap_err();
        assert!(matches!(err, PaletteError::Decode { .. }));
    }

    #[test]
    fn test_thumbnail_bounds_large_image() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(800, 400));
        let thumb = thumbnail(&img);
        assert!(thumb.width() <= THUMB_SIZE);
        assert!(thumb.height() <= THUMB_SIZE);
        // Aspect ratio preserved: 2:1 stays 2:1
        assert_eq!(thumb.width(), 200);
        assert_eq!(thumb.height(), 100);
    }

    #[test]
    fn test_thumbnail_never_upscales() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(50, 30));
        let thumb = thumbnail(&img);
        assert_eq!((thumb.width(), thumb.height()), (50, 30));
    }
}
