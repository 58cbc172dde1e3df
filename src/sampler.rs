//! Pixel sampling: reduce a decoded image to its distinct-color population
//!
//! Clustering only cares about which colors are present, not how often they
//! occur, so the sampler deduplicates the thumbnail's pixels. Colors are kept
//! in first-seen scan order to make seeded clustering reproducible.

use crate::color::Rgb;
use image::DynamicImage;
use std::collections::HashSet;

/// Extract the distinct colors of an image
///
/// The image is converted to 3-channel RGB first, dropping any alpha
/// channel. A fully uniform image yields a population of size 1.
pub fn sample(image: &DynamicImage) -> Vec<Rgb> {
    let rgb = image.to_rgb8();

    let mut seen = HashSet::new();
    let mut population = Vec::new();
    for pixel in rgb.pixels() {
        let color = Rgb::new(pixel[0], pixel[1], pixel[2]);
        if seen.insert(color) {
            population.push(color);
        }
    }

    population
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb as ImageRgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn test_sample_uniform_image() {
        let img = RgbImage::from_pixel(16, 16, ImageRgb([255, 0, 0]));
        let population = sample(&DynamicImage::ImageRgb8(img));
        assert_eq!(population, vec![Rgb::new(255, 0, 0)]);
    }

    #[test]
    fn test_sample_checkerboard() {
        let img = RgbImage::from_fn(8, 8, |x, y| {
            if (x + y) % 2 == 0 {
                ImageRgb([0, 0, 0])
            } else {
                ImageRgb([255, 255, 255])
            }
        });
        let population = sample(&DynamicImage::ImageRgb8(img));
        assert_eq!(population.len(), 2);
        assert!(population.contains(&Rgb::new(0, 0, 0)));
        assert!(population.contains(&Rgb::new(255, 255, 255)));
    }

    #[test]
    fn test_sample_drops_alpha() {
        // Same RGB under two alpha values collapses to one population entry
        let img = RgbaImage::from_fn(4, 4, |x, _| {
            if x % 2 == 0 {
                Rgba([10, 20, 30, 255])
            } else {
                Rgba([10, 20, 30, 64])
            }
        });
        let population = sample(&DynamicImage::ImageRgba8(img));
        assert_eq!(population, vec![Rgb::new(10, 20, 30)]);
    }

    #[test]
    fn test_sample_scan_order_deterministic() {
        let img = RgbImage::from_fn(4, 1, |x, _| ImageRgb([x as u8 * 10, 0, 0]));
        let population = sample(&DynamicImage::ImageRgb8(img));
        assert_eq!(
            population,
            vec![
                Rgb::new(0, 0, 0),
                Rgb::new(10, 0, 0),
                Rgb::new(20, 0, 0),
                Rgb::new(30, 0, 0),
            ]
        );
    }
}
