//! Watermark style configuration.
//!
//! [`WatermarkStyle`] is the explicit style record handed through the
//! pipeline; defaults live in [`crate::constants`] so multiple requests
//! can carry independent styles with no process-wide state.
//!
//! A style can also be loaded from a YAML file:
//!
//! ```yaml
//! text: "(c) Jane Doe Photography"
//! font_size: 32
//! fill_color: "#ffffff"
//! outline_color: "#000000"
//! outline_width: 1
//! angle: 45.0
//! density: 0.5
//! opacity: 0.3
//! ```

use crate::constants::{
    DEFAULT_ANGLE_DEGREES, DEFAULT_DENSITY, DEFAULT_FILL_COLOR, DEFAULT_FONT_SIZE,
    DEFAULT_OPACITY, DEFAULT_OUTLINE_COLOR, DEFAULT_OUTLINE_WIDTH,
};
use crate::error::WatermarkError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Default values
fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

fn default_fill_color() -> String {
    DEFAULT_FILL_COLOR.to_string()
}

fn default_outline_color() -> String {
    DEFAULT_OUTLINE_COLOR.to_string()
}

fn default_outline_width() -> u32 {
    DEFAULT_OUTLINE_WIDTH
}

fn default_angle() -> f32 {
    DEFAULT_ANGLE_DEGREES
}

fn default_density() -> f32 {
    DEFAULT_DENSITY
}

fn default_opacity() -> f32 {
    DEFAULT_OPACITY
}

/// Style record for one watermark request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatermarkStyle {
    /// Watermark text content
    #[serde(default)]
    pub text: String,

    /// Path to a TrueType font file; system fonts are tried when unset
    #[serde(default)]
    pub font_path: Option<PathBuf>,

    /// Font size in pixels (default: 24)
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Text color as hex string (default: "#ffffff")
    #[serde(default = "default_fill_color")]
    pub fill_color: String,

    /// Outline color as hex string (default: "#000000")
    #[serde(default = "default_outline_color")]
    pub outline_color: String,

    /// Outline width in pixels; 0 disables the outline (default: 1)
    #[serde(default = "default_outline_width")]
    pub outline_width: u32,

    /// Rotation angle of the repeated text in degrees, counter-clockwise
    /// positive, any real value (default: 45)
    #[serde(default = "default_angle")]
    pub angle: f32,

    /// Pattern density in (0, 1]; higher packs the text tighter
    /// (default: 0.5)
    #[serde(default = "default_density")]
    pub density: f32,

    /// Watermark opacity from 0.0 to 1.0 (default: 0.3)
    #[serde(default = "default_opacity")]
    pub opacity: f32,
}

impl Default for WatermarkStyle {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_path: None,
            font_size: DEFAULT_FONT_SIZE,
            fill_color: DEFAULT_FILL_COLOR.to_string(),
            outline_color: DEFAULT_OUTLINE_COLOR.to_string(),
            outline_width: DEFAULT_OUTLINE_WIDTH,
            angle: DEFAULT_ANGLE_DEGREES,
            density: DEFAULT_DENSITY,
            opacity: DEFAULT_OPACITY,
        }
    }
}

impl WatermarkStyle {
    /// Load a style from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, WatermarkError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| WatermarkError::Io(format!("{}: {}", path.display(), e)))?;
        serde_yaml::from_str(&raw).map_err(|e| {
            WatermarkError::Config(format!("invalid style file {}: {}", path.display(), e))
        })
    }

    /// Validate ranges before any rendering work begins.
    pub fn validate(&self) -> Result<(), WatermarkError> {
        if self.font_size == 0 {
            return Err(WatermarkError::InvalidParameter {
                param: "font_size".to_string(),
                message: "font size must be positive".to_string(),
            });
        }
        if !(self.density > 0.0 && self.density <= 1.0) {
            return Err(WatermarkError::InvalidParameter {
                param: "density".to_string(),
                message: format!("must be in (0, 1], got {}", self.density),
            });
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(WatermarkError::InvalidParameter {
                param: "opacity".to_string(),
                message: format!("must be in [0, 1], got {}", self.opacity),
            });
        }
        Ok(())
    }
}
