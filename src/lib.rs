//! # colorz
//!
//! A Rust crate for generating terminal color schemes from images.
//!
//! This library extracts a small palette of dominant colors from a photo by:
//! - Downscaling the image to a thumbnail and sampling its distinct colors
//! - Clamping perceptual brightness (HSV value) into a readable band
//! - Clustering the colors with k-means into N representatives
//! - Ordering the result by hue and deriving a brighter "bold" companion
//!   for each color
//!
//! ## Example
//!
//! ```rust,no_run
//! use colorz::{palette_from_path, ExtractOptions};
//! use std::path::Path;
//!
//! let palette = palette_from_path(Path::new("photo.jpg"), &ExtractOptions::default())?;
//! for entry in &palette {
//!     println!("{} {}", entry.base.to_hex(), entry.bold.to_hex());
//! }
//! # Ok::<(), colorz::PaletteError>(())
//! ```

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod image_loader;
pub mod sampler;

pub use color::{Hsv, Rgb};
pub use config::ExtractOptions;
pub use error::{PaletteError, Result};

use color::{clamp_population, palette, quantize};

/// One palette slot: a dominant base color and its bold companion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Dominant color with brightness clamped into the configured band
    pub base: Rgb,
    /// Brightness-boosted variant of the base color
    pub bold: Rgb,
}

/// Extract a color palette from an image file
///
/// This is the main entry point. It decodes the image, then runs the
/// sampling, clamping, clustering, and ordering pipeline.
///
/// # Arguments
///
/// * `path` - Path to the image file
/// * `options` - Extraction tunables; `ExtractOptions::default()` gives the
///   classic six-color terminal scheme
///
/// # Returns
///
/// Exactly `options.num_colors` palette entries, ordered by base hue when
/// `options.order_colors` is set.
///
/// # Errors
///
/// Returns `PaletteError` if:
/// - The image cannot be loaded or decoded
/// - The options are out of range (`num_colors` zero, inverted value bounds)
/// - The image has fewer distinct colors than requested
/// - Clustering fails to produce finite centroids
pub fn palette_from_path(path: &Path, options: &ExtractOptions) -> Result<Vec<PaletteEntry>> {
    let image = image_loader::load_image(path)?;
    palette_from_image(&image, options)
}

/// Extract a color palette from an in-memory encoded image
///
/// Accepts any byte buffer the `image` crate can decode. See
/// [`palette_from_path`] for the pipeline and error conditions.
pub fn palette_from_memory(bytes: &[u8], options: &ExtractOptions) -> Result<Vec<PaletteEntry>> {
    let image = image_loader::load_from_memory(bytes)?;
    palette_from_image(&image, options)
}

/// Extract a color palette from an already decoded image
///
/// Runs the core pipeline: thumbnail → sample distinct colors → clamp value
/// → cluster → order by hue → pair with bold variants. Pure and reentrant;
/// every tunable comes in through `options`.
///
/// # Errors
///
/// Same as [`palette_from_path`], minus decoding failures.
pub fn palette_from_image(
    image: &DynamicImage,
    options: &ExtractOptions,
) -> Result<Vec<PaletteEntry>> {
    options.validate()?;

    let thumb = image_loader::thumbnail(image);
    let population = sampler::sample(&thumb);
    let clamped = clamp_population(&population, options.min_value, options.max_value)?;
    let centroids = quantize::cluster(&clamped, options.num_colors, options.seed)?;

    let colors = palette::centroids_to_colors(&centroids);
    let colors = if options.order_colors {
        palette::order_by_hue(&colors)
    } else {
        colors
    };

    Ok(palette::assemble(&colors, options.bold_add))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_entry_serialization() {
        let entry = PaletteEntry {
            base: Rgb::new(200, 0, 0),
            bold: Rgb::new(250, 0, 0),
        };

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: PaletteEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(entry, deserialized);
    }

    #[test]
    fn test_palette_rejects_invalid_options_before_decoding_work() {
        let image = DynamicImage::ImageRgb8(image::RgbImage::new(4, 4));
        let options = ExtractOptions {
            num_colors: 0,
            ..ExtractOptions::default()
        };
        assert!(matches!(
            palette_from_image(&image, &options),
            Err(PaletteError::InvalidRange { .. })
        ));
    }
}
