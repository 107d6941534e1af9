//! High-level watermark pipeline.
//!
//! Drives one watermark request end to end: validate the style, resolve
//! colors, load a font through the capability interface, render the text
//! tile, tile it into a canvas-sized pattern, fade it to the requested
//! opacity, and composite it over the photo.
//!
//! Validation runs before any rendering work, so bad geometry never
//! produces a partial raster. A malformed color is the one recoverable
//! input: it degrades to the documented fallback instead of failing the
//! request.

use crate::color::{resolve_color, Color};
use crate::compositor::composite_over;
use crate::config::WatermarkStyle;
use crate::error::WatermarkError;
use crate::fonts::FontProvider;
use crate::glyph_block::{render_text_block, TextBlockStyle};
use crate::pattern::render_pattern;
use crate::raster::scale_alpha;
use image::DynamicImage;

/// Apply a repeating text watermark over the whole base image.
///
/// Returns a new image of identical dimensions; the base is untouched.
pub fn apply_text_watermark(
    base: &DynamicImage,
    style: &WatermarkStyle,
    fonts: &dyn FontProvider,
) -> Result<DynamicImage, WatermarkError> {
    style.validate()?;

    if style.text.is_empty() {
        return Err(WatermarkError::EmptyWatermark);
    }

    let width = base.width();
    let height = base.height();
    if width == 0 || height == 0 {
        return Err(WatermarkError::InvalidParameter {
            param: "canvas".to_string(),
            message: format!("base image must be non-empty, got {}x{}", width, height),
        });
    }

    let fill = resolve_color(&style.fill_color, Color::white());
    let outline = resolve_color(&style.outline_color, Color::black());

    let font = fonts.find_font()?;

    let block_style = TextBlockStyle {
        font,
        font_size: style.font_size as f32,
        fill,
        outline,
        outline_width: style.outline_width,
    };
    let tile = render_text_block(&style.text, &block_style)?;
    tracing::debug!(
        tile_width = tile.width(),
        tile_height = tile.height(),
        "Rendered text tile"
    );

    let pattern = render_pattern(&tile, width, height, style.angle, style.density)?;
    let pattern = scale_alpha(&pattern, style.opacity);

    let mut output = base.to_rgba8();
    composite_over(&mut output, &pattern, 0, 0);

    Ok(DynamicImage::ImageRgba8(output))
}
