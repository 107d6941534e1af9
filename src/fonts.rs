//! Font discovery and loading.
//!
//! Font lookup is platform-dependent and environment-global, so it sits
//! behind the [`FontProvider`] capability trait; the rendering pipeline
//! only ever sees a loaded [`FontArc`].
//!
//! [`SystemFontProvider`] implements the chain used by the CLI: an
//! explicitly requested font file first, then a list of well-known system
//! font locations. A requested font that fails to load logs a warning and
//! falls through to discovery; only exhausting the whole chain is fatal.

use crate::error::WatermarkError;
use ab_glyph::FontArc;
use std::fs;
use std::path::{Path, PathBuf};

/// Well-known font locations tried in order during discovery.
const FONT_CANDIDATES: &[&str] = &[
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/liberation2/LiberationSans-Regular.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/Arial.ttf",
    // macOS
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\verdana.ttf",
];

/// Capability interface supplying a usable font to the renderer.
pub trait FontProvider {
    /// Return a loaded font, or [`WatermarkError::FontUnavailable`] when
    /// the whole fallback chain is exhausted.
    fn find_font(&self) -> Result<FontArc, WatermarkError>;
}

/// Font provider backed by the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct SystemFontProvider {
    font_path: Option<PathBuf>,
}

impl SystemFontProvider {
    /// Create a provider, optionally preferring an explicit font file.
    pub fn new(font_path: Option<PathBuf>) -> Self {
        Self { font_path }
    }
}

impl FontProvider for SystemFontProvider {
    fn find_font(&self) -> Result<FontArc, WatermarkError> {
        if let Some(path) = &self.font_path {
            match load_font_file(path) {
                Ok(font) => return Ok(font),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Could not load requested font, trying system fonts"
                    );
                }
            }
        }

        for candidate in FONT_CANDIDATES {
            let path = Path::new(candidate);
            if !path.exists() {
                continue;
            }
            match load_font_file(path) {
                Ok(font) => {
                    tracing::debug!(path = %candidate, "Loaded system font");
                    return Ok(font);
                }
                Err(e) => {
                    tracing::debug!(path = %candidate, error = %e, "Skipping unreadable font");
                }
            }
        }

        Err(WatermarkError::FontUnavailable(
            "no usable font among the system candidates".to_string(),
        ))
    }
}

/// Load a font file from disk.
pub fn load_font_file(path: &Path) -> Result<FontArc, WatermarkError> {
    let data = fs::read(path)
        .map_err(|e| WatermarkError::Io(format!("{}: {}", path.display(), e)))?;
    FontArc::try_from_vec(data).map_err(|_| {
        WatermarkError::FontUnavailable(format!("invalid font file: {}", path.display()))
    })
}
