//! Shared raster operations: rotation with expansion, center cropping,
//! and alpha scaling.
//!
//! Rotation samples with bilinear interpolation so rotated text keeps
//! smooth edges instead of hard pixel aliasing.

use image::{imageops, Rgba, RgbaImage};

/// Rotate an image by the given angle in degrees, counter-clockwise
/// positive, expanding the bounding box to fit the rotated content.
///
/// The expanded corners are filled with transparent pixels.
pub fn rotate_expanded(image: &RgbaImage, degrees: f32) -> RgbaImage {
    let radians = degrees.to_radians();
    let cos = radians.cos();
    let sin = radians.sin();

    let src_w = image.width() as f32;
    let src_h = image.height() as f32;
    let cx = src_w / 2.0;
    let cy = src_h / 2.0;

    // Project the source corners to find the rotated bounding box
    let corners = [
        (-cx, -cy),
        (src_w - cx, -cy),
        (-cx, src_h - cy),
        (src_w - cx, src_h - cy),
    ];

    let rotated_corners: Vec<(f32, f32)> = corners
        .iter()
        .map(|(x, y)| (x * cos - y * sin, x * sin + y * cos))
        .collect();

    let min_x = rotated_corners
        .iter()
        .map(|(x, _)| *x)
        .fold(f32::INFINITY, f32::min);
    let max_x = rotated_corners
        .iter()
        .map(|(x, _)| *x)
        .fold(f32::NEG_INFINITY, f32::max);
    let min_y = rotated_corners
        .iter()
        .map(|(_, y)| *y)
        .fold(f32::INFINITY, f32::min);
    let max_y = rotated_corners
        .iter()
        .map(|(_, y)| *y)
        .fold(f32::NEG_INFINITY, f32::max);

    let dst_w = (max_x - min_x).ceil() as u32;
    let dst_h = (max_y - min_y).ceil() as u32;

    let mut rotated = RgbaImage::new(dst_w.max(1), dst_h.max(1));

    let dst_cx = dst_w as f32 / 2.0;
    let dst_cy = dst_h as f32 / 2.0;

    // Inverse rotation for sampling
    let inv_cos = (-radians).cos();
    let inv_sin = (-radians).sin();

    for dy in 0..dst_h {
        for dx in 0..dst_w {
            // Transform destination pixel to source coordinates
            let rx = dx as f32 - dst_cx;
            let ry = dy as f32 - dst_cy;

            let sx = rx * inv_cos - ry * inv_sin + cx;
            let sy = rx * inv_sin + ry * inv_cos + cy;

            // Bilinear interpolation
            if sx >= 0.0 && sx < src_w - 1.0 && sy >= 0.0 && sy < src_h - 1.0 {
                let x0 = sx.floor() as u32;
                let y0 = sy.floor() as u32;
                let x1 = x0 + 1;
                let y1 = y0 + 1;

                let fx = sx - x0 as f32;
                let fy = sy - y0 as f32;

                let p00 = image.get_pixel(x0, y0);
                let p10 = image.get_pixel(x1, y0);
                let p01 = image.get_pixel(x0, y1);
                let p11 = image.get_pixel(x1, y1);

                let interpolate = |c: usize| -> u8 {
                    let v00 = p00[c] as f32;
                    let v10 = p10[c] as f32;
                    let v01 = p01[c] as f32;
                    let v11 = p11[c] as f32;

                    let v = v00 * (1.0 - fx) * (1.0 - fy)
                        + v10 * fx * (1.0 - fy)
                        + v01 * (1.0 - fx) * fy
                        + v11 * fx * fy;

                    v.clamp(0.0, 255.0) as u8
                };

                rotated.put_pixel(
                    dx,
                    dy,
                    Rgba([
                        interpolate(0),
                        interpolate(1),
                        interpolate(2),
                        interpolate(3),
                    ]),
                );
            }
        }
    }

    rotated
}

/// Center-crop an image to exactly (width, height).
///
/// The source must be at least as large as the requested size.
pub fn crop_centered(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let left = image.width().saturating_sub(width) / 2;
    let top = image.height().saturating_sub(height) / 2;
    imageops::crop_imm(image, left, top, width, height).to_image()
}

/// Scale the alpha channel of every pixel by `opacity` in [0, 1].
///
/// Color channels are untouched; this is how the finished pattern is
/// faded before compositing onto the photo.
pub fn scale_alpha(image: &RgbaImage, opacity: f32) -> RgbaImage {
    let factor = opacity.clamp(0.0, 1.0);
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        pixel[3] = (pixel[3] as f32 * factor).round() as u8;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(width, height, color)
    }

    // Test: Rotation expands the bounding box
    #[test]
    fn test_rotate_zero_keeps_dimensions() {
        let img = solid(40, 20, Rgba([255, 0, 0, 255]));
        let rotated = rotate_expanded(&img, 0.0);
        assert_eq!(rotated.dimensions(), (40, 20));
    }

    #[test]
    fn test_rotate_90_swaps_dimensions() {
        let img = solid(40, 20, Rgba([255, 0, 0, 255]));
        let rotated = rotate_expanded(&img, 90.0);
        let (w, h) = rotated.dimensions();
        assert!((w as i32 - 20).abs() <= 1, "width {}", w);
        assert!((h as i32 - 40).abs() <= 1, "height {}", h);
    }

    #[test]
    fn test_rotate_45_square_grows_to_diagonal() {
        let img = solid(100, 100, Rgba([255, 0, 0, 255]));
        let rotated = rotate_expanded(&img, 45.0);
        let expected = (100.0f32 * std::f32::consts::SQRT_2).ceil() as i32;
        let (w, h) = rotated.dimensions();
        assert!((w as i32 - expected).abs() <= 1, "width {}", w);
        assert!((h as i32 - expected).abs() <= 1, "height {}", h);
    }

    #[test]
    fn test_rotate_45_fills_corners_transparent() {
        let img = solid(100, 100, Rgba([255, 0, 0, 255]));
        let rotated = rotate_expanded(&img, 45.0);

        // Center still carries the content
        let center = rotated.get_pixel(rotated.width() / 2, rotated.height() / 2);
        assert_eq!(center[0], 255);
        assert_eq!(center[3], 255);

        // The expanded corner is transparent padding
        let corner = rotated.get_pixel(0, 0);
        assert_eq!(corner[3], 0);
    }

    #[test]
    fn test_rotate_is_deterministic() {
        let mut img = RgbaImage::new(30, 17);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgba([(x * 7 % 256) as u8, (y * 13 % 256) as u8, 0, 255]);
        }
        let a = rotate_expanded(&img, 33.0);
        let b = rotate_expanded(&img, 33.0);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    // Test: Center crop picks the middle window
    #[test]
    fn test_crop_centered_dimensions() {
        let img = solid(100, 80, Rgba([0, 255, 0, 255]));
        let cropped = crop_centered(&img, 60, 40);
        assert_eq!(cropped.dimensions(), (60, 40));
    }

    #[test]
    fn test_crop_centered_takes_center_window() {
        let mut img = solid(100, 100, Rgba([0, 0, 0, 255]));
        // Mark the exact center of the source
        img.put_pixel(50, 50, Rgba([255, 0, 0, 255]));

        let cropped = crop_centered(&img, 50, 50);
        // Source center lands at (50 - 25, 50 - 25)
        let pixel = cropped.get_pixel(25, 25);
        assert_eq!(pixel[0], 255);
    }

    // Test: Alpha scaling
    #[test]
    fn test_scale_alpha_halves_alpha() {
        let img = solid(10, 10, Rgba([200, 100, 50, 200]));
        let faded = scale_alpha(&img, 0.5);
        let pixel = faded.get_pixel(5, 5);
        assert_eq!(pixel[0], 200);
        assert_eq!(pixel[1], 100);
        assert_eq!(pixel[2], 50);
        assert_eq!(pixel[3], 100);
    }

    #[test]
    fn test_scale_alpha_clamps_opacity() {
        let img = solid(4, 4, Rgba([10, 20, 30, 100]));

        let zero = scale_alpha(&img, -1.0);
        assert_eq!(zero.get_pixel(0, 0)[3], 0);

        let full = scale_alpha(&img, 2.0);
        assert_eq!(full.get_pixel(0, 0)[3], 100);
    }
}
