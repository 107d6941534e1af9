//! Alpha compositing of rasters.
//!
//! Provides Porter-Duff "over" blending and clipped stamping of one RGBA
//! raster onto another. Stamping never overwrites: overlapping stamps
//! accumulate through the alpha channel.

use image::{Rgba, RgbaImage};

/// Blend two RGBA pixels using the Porter-Duff "over" operator.
///
/// result = foreground + background * (1 - foreground.alpha)
pub fn blend_pixels(background: Rgba<u8>, foreground: Rgba<u8>) -> Rgba<u8> {
    let fg_alpha = foreground[3] as f32 / 255.0;
    let bg_alpha = background[3] as f32 / 255.0;

    let out_alpha = fg_alpha + bg_alpha * (1.0 - fg_alpha);

    if out_alpha < 0.001 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend_channel = |fg: u8, bg: u8| -> u8 {
        let fg_f = fg as f32 / 255.0;
        let bg_f = bg as f32 / 255.0;
        let result = (fg_f * fg_alpha + bg_f * bg_alpha * (1.0 - fg_alpha)) / out_alpha;
        (result * 255.0).clamp(0.0, 255.0) as u8
    };

    Rgba([
        blend_channel(foreground[0], background[0]),
        blend_channel(foreground[1], background[1]),
        blend_channel(foreground[2], background[2]),
        (out_alpha * 255.0) as u8,
    ])
}

/// Alpha-composite `src` onto `target` with its top-left corner at (x, y).
///
/// The position may be negative or extend past the target; only the
/// overlapping region is touched.
pub fn composite_over(target: &mut RgbaImage, src: &RgbaImage, x: i32, y: i32) {
    let target_width = target.width() as i32;
    let target_height = target.height() as i32;

    let src_width = src.width() as i32;
    let src_height = src.height() as i32;

    // Visible region, clamped to target bounds
    let x_start = x.max(0);
    let y_start = y.max(0);
    let x_end = (x + src_width).min(target_width);
    let y_end = (y + src_height).min(target_height);

    for ty in y_start..y_end {
        for tx in x_start..x_end {
            let sx = (tx - x) as u32;
            let sy = (ty - y) as u32;

            let src_pixel = src.get_pixel(sx, sy);
            if src_pixel[3] == 0 {
                continue;
            }

            let target_pixel = target.get_pixel(tx as u32, ty as u32);
            let blended = blend_pixels(*target_pixel, *src_pixel);
            target.put_pixel(tx as u32, ty as u32, blended);
        }
    }
}
