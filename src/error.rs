//! Error types for the colorz library

use thiserror::Error;

/// Result type alias for colorz operations
pub type Result<T> = std::result::Result<T, PaletteError>;

/// Error types for palette extraction operations
#[derive(Error, Debug)]
pub enum PaletteError {
    /// Image could not be opened or decoded
    #[error("Failed to decode image: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid extraction parameters (checked before any clustering work)
    #[error("Invalid parameter: {parameter} = {value} ({reason})")]
    InvalidRange {
        parameter: &'static str,
        value: String,
        reason: String,
    },

    /// Fewer distinct colors in the image than palette slots requested
    #[error("Image has {distinct} distinct colors but {requested} were requested")]
    InsufficientColors { requested: usize, distinct: usize },

    /// Clustering produced non-finite centroids even after reseeding
    #[error("Clustering failed to produce finite centroids after {attempts} attempts")]
    NumericInstability { attempts: u32 },
}

impl PaletteError {
    /// Create a decode error with context
    pub fn decode<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid-range error for a named parameter
    pub fn invalid_range(
        parameter: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidRange {
            parameter,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Recoverable errors can usually be fixed by adjusting the request
    /// (fewer colors, different seed) rather than changing the input image.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PaletteError::InsufficientColors { .. } | PaletteError::NumericInstability { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            PaletteError::Decode { .. } => {
                "Could not read the image. Please check the file format and try again.".to_string()
            }
            PaletteError::InvalidRange { parameter, .. } => {
                format!(
                    "The {} setting is out of range. Please adjust it and retry.",
                    parameter
                )
            }
            PaletteError::InsufficientColors { requested, distinct } => {
                format!(
                    "The image only contains {} distinct colors. Request {} or fewer palette colors.",
                    distinct,
                    distinct.min(requested)
                )
            }
            PaletteError::NumericInstability { .. } => {
                "Color clustering did not stabilize. Try a different seed or image.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_colors_is_recoverable() {
        let err = PaletteError::InsufficientColors {
            requested: 6,
            distinct: 2,
        };
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_invalid_range_message() {
        let err = PaletteError::invalid_range("min_value", 220, "exceeds max_value = 200");
        let msg = err.to_string();
        assert!(msg.contains("min_value"));
        assert!(msg.contains("220"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_user_message_suggests_fewer_colors() {
        let err = PaletteError::InsufficientColors {
            requested: 6,
            distinct: 2,
        };
        assert!(err.user_message().contains("Request 2 or fewer"));

        // The suggestion never exceeds what was asked for
        let err = PaletteError::InsufficientColors {
            requested: 3,
            distinct: 10,
        };
        assert!(err.user_message().contains("Request 3 or fewer"));
    }
}
