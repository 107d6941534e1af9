//! Text tile rendering.
//!
//! Renders one instance of the watermark text, with an optional stroke
//! outline, into a tightly-fitted transparent RGBA tile. The tile is the
//! unit that the pattern generator rotates and repeats.
//!
//! The outline is approximated by redrawing the text in the outline color
//! at every integer offset in `[-w, w]^2` around the fill position, then
//! drawing the fill on top. That costs `O(w^2)` text passes, which stays
//! cheap because outline widths are a few pixels at most.

use crate::color::Color;
use crate::compositor::blend_pixels;
use crate::error::WatermarkError;
use ab_glyph::{point, Font, FontArc, GlyphId, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};

/// Styling for a rendered text tile.
#[derive(Debug, Clone)]
pub struct TextBlockStyle {
    pub font: FontArc,
    /// Font size in pixels.
    pub font_size: f32,
    /// Text fill color.
    pub fill: Color,
    /// Outline color, used when `outline_width > 0`.
    pub outline: Color,
    /// Outline width in pixels; 0 disables the outline pass entirely.
    pub outline_width: u32,
}

/// Calculate the dimensions of rendered text.
///
/// Width is the kerning-aware sum of glyph advances; height is the
/// scaled line height.
pub fn measure_text(font: &FontArc, text: &str, font_size: f32) -> (u32, u32) {
    let scale = PxScale::from(font_size);
    let scaled_font = font.as_scaled(scale);

    let mut width = 0.0f32;
    let mut prev_glyph: Option<GlyphId> = None;

    for c in text.chars() {
        let glyph_id = scaled_font.glyph_id(c);

        if let Some(prev) = prev_glyph {
            width += scaled_font.kern(prev, glyph_id);
        }

        width += scaled_font.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    let height = scaled_font.height();

    // Small pad so antialiased glyph edges are not clipped
    let padding = 2;
    (
        width.ceil() as u32 + padding,
        height.ceil() as u32 + padding,
    )
}

/// Render the text once into `canvas` with its top-left at `origin`.
///
/// Glyph coverage is alpha-blended over whatever is already in the
/// canvas, so repeated calls stack.
fn draw_text(
    canvas: &mut RgbaImage,
    font: &FontArc,
    scale: PxScale,
    origin: (i32, i32),
    text: &str,
    color: Color,
) {
    let scaled_font = font.as_scaled(scale);
    let (canvas_width, canvas_height) = canvas.dimensions();

    let baseline_y = origin.1 as f32 + scaled_font.ascent();
    let mut cursor_x = origin.0 as f32;
    let mut prev_glyph: Option<GlyphId> = None;

    for c in text.chars() {
        let glyph_id = scaled_font.glyph_id(c);

        if let Some(prev) = prev_glyph {
            cursor_x += scaled_font.kern(prev, glyph_id);
        }

        let glyph = glyph_id.with_scale_and_position(scale, point(cursor_x, baseline_y));

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();

            outlined.draw(|px, py, coverage| {
                let x = px as i32 + bounds.min.x as i32;
                let y = py as i32 + bounds.min.y as i32;

                if x >= 0 && y >= 0 && x < canvas_width as i32 && y < canvas_height as i32 {
                    let alpha = (coverage * 255.0) as u8;
                    let top = Rgba([color.r, color.g, color.b, alpha]);

                    let existing = canvas.get_pixel(x as u32, y as u32);
                    let blended = blend_pixels(*existing, top);
                    canvas.put_pixel(x as u32, y as u32, blended);
                }
            });
        }

        cursor_x += scaled_font.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }
}

/// Render the watermark text into a tightly-fitted transparent tile.
///
/// The tile carries `2 * outline_width` transparent padding on every side
/// so outline strokes drawn at any offset stay inside the raster.
///
/// Empty text, or text that measures to a zero-area box, fails with
/// [`WatermarkError::EmptyWatermark`]: a degenerate tile would produce a
/// degenerate pattern.
pub fn render_text_block(text: &str, style: &TextBlockStyle) -> Result<RgbaImage, WatermarkError> {
    if text.is_empty() {
        return Err(WatermarkError::EmptyWatermark);
    }

    let (text_width, text_height) = measure_text(&style.font, text, style.font_size);
    if text_width == 0 || text_height == 0 {
        return Err(WatermarkError::EmptyWatermark);
    }

    let outline_width = style.outline_width;
    let padding = (outline_width * 2) as i32;

    let mut canvas = RgbaImage::new(
        text_width + 4 * outline_width,
        text_height + 4 * outline_width,
    );
    let scale = PxScale::from(style.font_size);

    // Outline pass: redraw at every offset around the fill position
    if outline_width > 0 {
        let w = outline_width as i32;
        for offset_x in -w..=w {
            for offset_y in -w..=w {
                if offset_x == 0 && offset_y == 0 {
                    continue;
                }
                draw_text(
                    &mut canvas,
                    &style.font,
                    scale,
                    (padding + offset_x, padding + offset_y),
                    text,
                    style.outline,
                );
            }
        }
    }

    // Fill pass, composited on top of the outline strokes
    draw_text(
        &mut canvas,
        &style.font,
        scale,
        (padding, padding),
        text,
        style.fill,
    );

    Ok(canvas)
}
