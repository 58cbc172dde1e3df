//! Default tunables and fixed parameters for palette extraction
//!
//! This module contains compile-time constants for the extraction pipeline,
//! grouped by the stage they control. The default values reproduce the
//! classic terminal-scheme behavior: six base colors with brightness pinned
//! into a readable band, plus brighter bold companions.

/// Default extraction parameters
pub mod defaults {
    /// Number of base colors in the palette (bold variants excluded)
    pub const NUM_COLORS: usize = 6;

    /// Minimum HSV value for palette colors, on the 0-255 scale
    pub const MIN_VALUE: u8 = 170;

    /// Maximum HSV value for palette colors, on the 0-255 scale
    pub const MAX_VALUE: u8 = 200;

    /// Value added to derive the bold companion of each base color
    pub const BOLD_ADD: i32 = 50;

    /// Whether palette colors are ordered by hue
    pub const ORDER_COLORS: bool = true;
}

/// Pixel sampling parameters
pub mod sampling {
    /// Maximum thumbnail dimension; the source image is scaled down to fit
    /// within this bound (aspect preserved, never upscaled) before the
    /// distinct-color population is collected.
    pub const THUMB_SIZE: u32 = 200;
}

/// Channel scaling between integer RGB and normalized HSV
pub mod scale {
    /// Divisor/multiplier between 0-255 channels and 0.0-1.0 floats.
    ///
    /// 256 rather than 255: byte channels divide exactly in binary floating
    /// point, so value clamping and the HSV round trip reproduce input
    /// channels bit-for-bit on the max/min channel.
    pub const CHANNEL_SCALE: f64 = 256.0;
}

/// k-means clustering parameters
pub mod clustering {
    /// Iteration cap so clustering terminates regardless of input
    pub const MAX_ITERATIONS: usize = 64;

    /// Convergence threshold: maximum squared centroid movement (in 0-255
    /// channel units) below which iteration stops
    pub const CONVERGENCE_THRESHOLD: f64 = 1e-3;

    /// How many reseeded attempts are made when a run yields non-finite
    /// centroids before reporting `NumericInstability`
    pub const MAX_SEED_ATTEMPTS: u32 = 3;
}
