//! Color value types and RGB/HSV conversion
//!
//! Provides the two color representations used by the pipeline:
//! - [`Rgb`]: integer 0-255 triples, the only type that crosses module
//!   boundaries
//! - [`Hsv`]: normalized 0.0-1.0 floats, used internally for value
//!   (brightness) manipulation and hue ordering
//!
//! Conversions follow the classic max/min-channel transform. Scaling back to
//! the integer domain truncates rather than rounds, and out-of-range values
//! (which a value boost can produce) saturate at the byte bounds instead of
//! wrapping or panicking.

use crate::constants::scale::CHANNEL_SCALE;
use crate::error::{PaletteError, Result};
use serde::{Deserialize, Serialize};

/// An RGB color with 0-255 integer channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An HSV color with normalized float channels
///
/// Hue and saturation stay within [0, 1]; value is nominally [0, 1] but may
/// leave that range transiently after [`Hsv::add_value`]. Conversion back to
/// [`Rgb`] saturates, so out-of-range values are safe to carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Scale a 0-255 channel down to a normalized float
fn down_scale(x: u8) -> f64 {
    f64::from(x) / CHANNEL_SCALE
}

/// Scale a normalized float back to a 0-255 channel
///
/// Truncates (floor) rather than rounds, then saturates into [0, 255].
fn up_scale(x: f64) -> u8 {
    (x * CHANNEL_SCALE).floor().clamp(0.0, 255.0) as u8
}

impl Rgb {
    /// Create a color from 0-255 channel values
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to normalized HSV
    pub fn to_hsv(self) -> Hsv {
        let r = down_scale(self.r);
        let g = down_scale(self.g);
        let b = down_scale(self.b);

        let maxc = r.max(g).max(b);
        let minc = r.min(g).min(b);
        let v = maxc;

        if maxc == minc {
            // Achromatic: hue is undefined, reported as 0
            return Hsv { h: 0.0, s: 0.0, v };
        }

        let delta = maxc - minc;
        let s = delta / maxc;
        let rc = (maxc - r) / delta;
        let gc = (maxc - g) / delta;
        let bc = (maxc - b) / delta;

        let h = if r == maxc {
            bc - gc
        } else if g == maxc {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Hsv {
            h: (h / 6.0).rem_euclid(1.0),
            s,
            v,
        }
    }

    /// Clamp the value (brightness) channel into `[min_v, max_v]`
    ///
    /// Both bounds are on the 0-255 scale and are normalized before
    /// clamping. Hue and saturation are untouched. Callers must ensure
    /// `min_v <= max_v`; [`clamp_population`] enforces this with an
    /// `InvalidRange` error.
    pub fn clamp_value(self, min_v: u8, max_v: u8) -> Rgb {
        let mut hsv = self.to_hsv();
        hsv.v = hsv.v.max(down_scale(min_v)).min(down_scale(max_v));
        hsv.to_rgb()
    }

    /// Add (or subtract, for negative `delta`) brightness
    ///
    /// `delta` is on the 0-255 scale. No clamping happens in HSV space; the
    /// conversion back to RGB saturates at the byte bounds.
    pub fn add_value(self, delta: i32) -> Rgb {
        let mut hsv = self.to_hsv();
        hsv.v += f64::from(delta) / CHANNEL_SCALE;
        hsv.to_rgb()
    }

    /// Format as a lowercase `#rrggbb` hex string
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse a hex color string (`#rrggbb` or `rrggbb`)
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if the string is not six hex digits.
    pub fn from_hex(hex: &str) -> Result<Rgb> {
        let hex = hex.trim_start_matches('#');
        // Byte-length alone is not enough: multi-byte characters would make
        // the digit slices below panic on a char boundary
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(PaletteError::invalid_range(
                "hex",
                hex,
                format!("expected 6 hex digits, got {:?}", hex),
            ));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| PaletteError::invalid_range("hex", hex, e.to_string()))
        };

        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl Hsv {
    /// Convert back to integer RGB
    ///
    /// Inverse of [`Rgb::to_hsv`]. Channel scaling truncates, and values
    /// outside [0, 1] saturate to the nearest byte bound.
    pub fn to_rgb(self) -> Rgb {
        let Hsv { h, s, v } = self;

        if s == 0.0 {
            let c = up_scale(v);
            return Rgb { r: c, g: c, b: c };
        }

        let sector = (h * 6.0).floor();
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match (sector as i64).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgb {
            r: up_scale(r),
            g: up_scale(g),
            b: up_scale(b),
        }
    }
}

/// Clamp the value channel of every color in a population
///
/// Pure element-wise map of [`Rgb::clamp_value`].
///
/// # Errors
///
/// Returns `InvalidRange` if `min_v > max_v`; the bounds are never swapped
/// silently.
pub fn clamp_population(population: &[Rgb], min_v: u8, max_v: u8) -> Result<Vec<Rgb>> {
    if min_v > max_v {
        return Err(PaletteError::invalid_range(
            "min_value",
            min_v,
            format!("exceeds max_value = {}", max_v),
        ));
    }

    Ok(population
        .iter()
        .map(|color| color.clamp_value(min_v, max_v))
        .collect())
}
