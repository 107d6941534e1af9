// Sukashi watermarking library
//
// Renders diagonal repeating text watermark patterns and composites
// them over photos.

pub mod color;
pub mod compositor;
pub mod config;
pub mod constants;
pub mod error;
pub mod fonts;
pub mod glyph_block;
pub mod images;
pub mod lattice;
pub mod logging;
pub mod pattern;
pub mod processor;
pub mod raster;

// Re-export main types for convenience
pub use color::{parse_hex_color, resolve_color, Color};
pub use config::WatermarkStyle;
pub use error::WatermarkError;
pub use fonts::{FontProvider, SystemFontProvider};
pub use glyph_block::{measure_text, render_text_block, TextBlockStyle};
pub use lattice::{LatticeSpec, PlacementPosition};
pub use pattern::render_pattern;
pub use processor::apply_text_watermark;
