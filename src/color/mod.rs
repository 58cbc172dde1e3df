//! Color conversion, quantization, and palette assembly
//!
//! This module holds the algorithmic core of the pipeline: RGB/HSV
//! conversion with value clamping, k-means quantization of the sampled
//! population, and hue-ordered palette assembly.

pub mod conversion;
pub mod palette;
pub mod quantize;

pub use conversion::{clamp_population, Hsv, Rgb};
