//! Watermark error types.
//!
//! Defines errors that can occur while rendering and applying watermarks.

use std::fmt;

/// Errors that can occur during watermark processing.
#[derive(Debug, Clone)]
pub enum WatermarkError {
    /// No usable font could be loaded, including the fallback chain
    FontUnavailable(String),

    /// Empty text or a zero-area text tile; the pattern would be degenerate
    EmptyWatermark,

    /// Malformed color string (callers may recover with a fallback color)
    InvalidColor(String),

    /// Invalid geometry or style parameter
    InvalidParameter { param: String, message: String },

    /// Failed to decode an input image
    Decode(String),

    /// Failed to encode the output image
    Encode(String),

    /// Filesystem error while reading or writing
    Io(String),

    /// Invalid style configuration
    Config(String),
}

impl fmt::Display for WatermarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FontUnavailable(msg) => write!(f, "No usable font found: {}", msg),
            Self::EmptyWatermark => write!(f, "Watermark text renders to an empty tile"),
            Self::InvalidColor(msg) => write!(f, "Invalid color: {}", msg),
            Self::InvalidParameter { param, message } => {
                write!(f, "Invalid parameter '{}': {}", param, message)
            }
            Self::Decode(msg) => write!(f, "Failed to decode image: {}", msg),
            Self::Encode(msg) => write!(f, "Failed to encode image: {}", msg),
            Self::Io(msg) => write!(f, "I/O error: {}", msg),
            Self::Config(msg) => write!(f, "Style configuration error: {}", msg),
        }
    }
}

impl std::error::Error for WatermarkError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WatermarkError::FontUnavailable("no candidates matched".to_string());
        assert_eq!(err.to_string(), "No usable font found: no candidates matched");

        let err = WatermarkError::EmptyWatermark;
        assert_eq!(err.to_string(), "Watermark text renders to an empty tile");

        let err = WatermarkError::InvalidColor("missing '#'".to_string());
        assert_eq!(err.to_string(), "Invalid color: missing '#'");

        let err = WatermarkError::InvalidParameter {
            param: "density".to_string(),
            message: "must be in (0, 1]".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'density': must be in (0, 1]"
        );

        let err = WatermarkError::Decode("truncated PNG".to_string());
        assert_eq!(err.to_string(), "Failed to decode image: truncated PNG");
    }

    #[test]
    fn test_error_debug() {
        let err = WatermarkError::Io("permission denied".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Io"));
        assert!(debug_str.contains("permission denied"));
    }
}
