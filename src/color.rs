//! Color parsing for watermark styling.
//!
//! Supports hex color strings in #RGB and #RRGGBB formats. Malformed
//! colors are recoverable: callers substitute a documented fallback and
//! continue instead of aborting the whole watermark request.

use crate::error::WatermarkError;

/// Parsed RGB color from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// White color.
    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Black color.
    pub fn black() -> Self {
        Self::new(0, 0, 0)
    }
}

/// Parse a hex color string into RGB components.
///
/// Supports both #RGB and #RRGGBB formats.
pub fn parse_hex_color(hex: &str) -> Result<Color, WatermarkError> {
    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| WatermarkError::InvalidColor("color must start with '#'".to_string()))?;

    match digits.len() {
        3 => {
            // #RGB format - each hex digit is doubled: 0xF -> 0xFF
            let r = u8::from_str_radix(&digits[0..1], 16)
                .map_err(|_| WatermarkError::InvalidColor("invalid hex digit".to_string()))?;
            let g = u8::from_str_radix(&digits[1..2], 16)
                .map_err(|_| WatermarkError::InvalidColor("invalid hex digit".to_string()))?;
            let b = u8::from_str_radix(&digits[2..3], 16)
                .map_err(|_| WatermarkError::InvalidColor("invalid hex digit".to_string()))?;
            Ok(Color::new(r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16)
                .map_err(|_| WatermarkError::InvalidColor("invalid hex digit".to_string()))?;
            let g = u8::from_str_radix(&digits[2..4], 16)
                .map_err(|_| WatermarkError::InvalidColor("invalid hex digit".to_string()))?;
            let b = u8::from_str_radix(&digits[4..6], 16)
                .map_err(|_| WatermarkError::InvalidColor("invalid hex digit".to_string()))?;
            Ok(Color::new(r, g, b))
        }
        _ => Err(WatermarkError::InvalidColor(format!(
            "color must be #RGB or #RRGGBB format, got {} characters",
            digits.len()
        ))),
    }
}

/// Parse a hex color, substituting a fallback when the input is malformed.
///
/// A bad color string is a cosmetic input error and must not abort the
/// watermark request; the fallback is used and a warning is surfaced.
pub fn resolve_color(hex: &str, fallback: Color) -> Color {
    match parse_hex_color(hex) {
        Ok(color) => color,
        Err(e) => {
            tracing::warn!(input = %hex, error = %e, "Invalid color string, using fallback");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test: Hex color parsing (#RGB, #RRGGBB)
    #[test]
    fn test_parse_hex_color_rrggbb() {
        let color = parse_hex_color("#FF0000").unwrap();
        assert_eq!(color, Color::new(255, 0, 0));

        let color = parse_hex_color("#00FF00").unwrap();
        assert_eq!(color, Color::new(0, 255, 0));

        let color = parse_hex_color("#0000FF").unwrap();
        assert_eq!(color, Color::new(0, 0, 255));

        let color = parse_hex_color("#FFFFFF").unwrap();
        assert_eq!(color, Color::new(255, 255, 255));

        let color = parse_hex_color("#000000").unwrap();
        assert_eq!(color, Color::new(0, 0, 0));
    }

    #[test]
    fn test_parse_hex_color_rgb() {
        let color = parse_hex_color("#F00").unwrap();
        assert_eq!(color, Color::new(255, 0, 0));

        let color = parse_hex_color("#ABC").unwrap();
        // A=10*17=170, B=11*17=187, C=12*17=204
        assert_eq!(color, Color::new(170, 187, 204));
    }

    #[test]
    fn test_parse_hex_color_lowercase() {
        let color = parse_hex_color("#ff0000").unwrap();
        assert_eq!(color, Color::new(255, 0, 0));

        let color = parse_hex_color("#abc").unwrap();
        assert_eq!(color, Color::new(170, 187, 204));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        // Missing #
        assert!(parse_hex_color("FF0000").is_err());

        // Wrong length
        assert!(parse_hex_color("#FF00").is_err());
        assert!(parse_hex_color("#FF00000").is_err());

        // Invalid hex
        assert!(parse_hex_color("#GGGGGG").is_err());
    }

    // Test: Fallback substitution keeps processing alive
    #[test]
    fn test_resolve_color_valid_input() {
        let color = resolve_color("#FF0000", Color::white());
        assert_eq!(color, Color::new(255, 0, 0));
    }

    #[test]
    fn test_resolve_color_falls_back() {
        let color = resolve_color("not-a-color", Color::white());
        assert_eq!(color, Color::white());

        let color = resolve_color("#GG0000", Color::black());
        assert_eq!(color, Color::black());
    }

    #[test]
    fn test_color_helpers() {
        assert_eq!(Color::white(), Color::new(255, 255, 255));
        assert_eq!(Color::black(), Color::new(0, 0, 0));
    }
}
