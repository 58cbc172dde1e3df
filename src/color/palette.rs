//! Palette assembly: hue ordering and bold variant derivation
//!
//! Centroids come out of the quantizer in arbitrary order. For terminal
//! schemes a hue-sorted sequence (red, yellow, green, cyan, blue, magenta)
//! maps naturally onto ANSI color slots, so ordering is on by default and
//! skipped only on request. Each ordered base color is then paired with a
//! brightness-boosted bold companion.

use crate::color::quantize::Centroid;
use crate::color::Rgb;
use crate::PaletteEntry;

/// Truncate float centroids to integer RGB colors
pub fn centroids_to_colors(centroids: &[Centroid]) -> Vec<Rgb> {
    centroids
        .iter()
        .map(|c| {
            Rgb::new(
                c[0].clamp(0.0, 255.0) as u8,
                c[1].clamp(0.0, 255.0) as u8,
                c[2].clamp(0.0, 255.0) as u8,
            )
        })
        .collect()
}

/// Sort colors ascending by hue
///
/// The sort is stable: ties (including achromatic colors, which report hue
/// 0) keep their incoming relative order, so re-sorting an already ordered
/// palette is a no-op.
pub fn order_by_hue(colors: &[Rgb]) -> Vec<Rgb> {
    let mut ordered: Vec<Rgb> = colors.to_vec();
    ordered.sort_by(|a, b| a.to_hsv().h.total_cmp(&b.to_hsv().h));
    ordered
}

/// Derive the bold companion of a base color by boosting its value channel
pub fn derive_bold(color: Rgb, bold_add: i32) -> Rgb {
    color.add_value(bold_add)
}

/// Pair each base color with its bold variant, in order
pub fn assemble(colors: &[Rgb], bold_add: i32) -> Vec<PaletteEntry> {
    colors
        .iter()
        .map(|&base| PaletteEntry {
            base,
            bold: derive_bold(base, bold_add),
        })
        .collect()
}
