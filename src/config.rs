//! Configuration for the palette extraction pipeline
//!
//! All tunables are passed explicitly per invocation; there is no global
//! mutable configuration, so concurrent callers stay isolated.
//!
//! # Configuration Loading
//!
//! Options can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use colorz::ExtractOptions;
//! use std::path::Path;
//!
//! // Load from file
//! let options = ExtractOptions::from_json_file(Path::new("options.json"))?;
//!
//! // Or use defaults
//! let options = ExtractOptions::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::constants::defaults;
use crate::error::{PaletteError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable parameters for a palette extraction run.
///
/// Can be serialized to/from JSON for reproducible runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Number of base colors in the palette (bold variants excluded)
    pub num_colors: usize,

    /// Minimum HSV value for palette colors (0-255 scale)
    pub min_value: u8,

    /// Maximum HSV value for palette colors (0-255 scale)
    pub max_value: u8,

    /// Value added to derive each bold companion; may be negative
    pub bold_add: i32,

    /// Order palette colors by hue (red, yellow, green, cyan, blue, magenta)
    pub order_colors: bool,

    /// Seed for clustering initialization; `None` seeds from entropy.
    /// Pin this for reproducible palettes.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            num_colors: defaults::NUM_COLORS,
            min_value: defaults::MIN_VALUE,
            max_value: defaults::MAX_VALUE,
            bold_add: defaults::BOLD_ADD,
            order_colors: defaults::ORDER_COLORS,
            seed: None,
        }
    }
}

impl ExtractOptions {
    /// Check parameter ranges before any pipeline work
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if `num_colors` is zero or
    /// `min_value > max_value`.
    pub fn validate(&self) -> Result<()> {
        if self.num_colors == 0 {
            return Err(PaletteError::invalid_range(
                "num_colors",
                self.num_colors,
                "at least one color is required",
            ));
        }
        if self.min_value > self.max_value {
            return Err(PaletteError::invalid_range(
                "min_value",
                self.min_value,
                format!("exceeds max_value = {}", self.max_value),
            ));
        }
        Ok(())
    }

    /// Load options from a JSON file
    pub fn from_json_file(path: &Path) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let options: Self = serde_json::from_str(&content)?;
        Ok(options)
    }

    /// Save options to a JSON file
    pub fn to_json_file(&self, path: &Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ExtractOptions::default();
        assert_eq!(options.num_colors, 6);
        assert_eq!(options.min_value, 170);
        assert_eq!(options.max_value, 200);
        assert_eq!(options.bold_add, 50);
        assert!(options.order_colors);
        assert!(options.seed.is_none());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_colors() {
        let options = ExtractOptions {
            num_colors: 0,
            ..ExtractOptions::default()
        };
        assert!(matches!(
            options.validate(),
            Err(PaletteError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_value_bounds() {
        let options = ExtractOptions {
            min_value: 201,
            max_value: 200,
            ..ExtractOptions::default()
        };
        assert!(matches!(
            options.validate(),
            Err(PaletteError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let options = ExtractOptions {
            num_colors: 8,
            seed: Some(42),
            ..ExtractOptions::default()
        };
        let json = serde_json::to_string(&options).unwrap();
        let back: ExtractOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back.num_colors, 8);
        assert_eq!(back.seed, Some(42));
        assert_eq!(back.min_value, options.min_value);
    }

    #[test]
    fn test_json_file_roundtrip() {
        let path = std::env::temp_dir().join("colorz_options_test.json");
        let options = ExtractOptions {
            num_colors: 3,
            bold_add: -10,
            seed: Some(7),
            ..ExtractOptions::default()
        };
        options.to_json_file(&path).unwrap();
        let loaded = ExtractOptions::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.num_colors, 3);
        assert_eq!(loaded.bold_add, -10);
        assert_eq!(loaded.seed, Some(7));
    }

    #[test]
    fn test_json_missing_seed_defaults_to_none() {
        let json = r#"{
            "num_colors": 4,
            "min_value": 100,
            "max_value": 220,
            "bold_add": 30,
            "order_colors": false
        }"#;
        let options: ExtractOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.seed, None);
        assert!(!options.order_colors);
    }
}
