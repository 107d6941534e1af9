//! Image loading and saving.
//!
//! Thin wrappers over the `image` crate that map failures into
//! [`WatermarkError`] and handle the output-format details: JPEG has no
//! alpha channel, so RGBA output is flattened to RGB before encoding.

use crate::error::WatermarkError;
use image::DynamicImage;
use std::fs;
use std::path::{Path, PathBuf};

/// Output extensions written as-is; anything else falls back to PNG.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Load an image from disk.
pub fn load_image(path: &Path) -> Result<DynamicImage, WatermarkError> {
    if !path.exists() {
        return Err(WatermarkError::Io(format!(
            "input file does not exist: {}",
            path.display()
        )));
    }
    image::open(path).map_err(|e| WatermarkError::Decode(format!("{}: {}", path.display(), e)))
}

/// Save an image to disk, creating parent directories as needed.
pub fn save_image(image: &DynamicImage, path: &Path) -> Result<(), WatermarkError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|e| WatermarkError::Io(format!("{}: {}", parent.display(), e)))?;
        }
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        // JPEG carries no alpha channel
        Some("jpg") | Some("jpeg") => image
            .to_rgb8()
            .save(path)
            .map_err(|e| WatermarkError::Encode(format!("{}: {}", path.display(), e))),
        _ => image
            .save(path)
            .map_err(|e| WatermarkError::Encode(format!("{}: {}", path.display(), e))),
    }
}

/// Derive the default output path: `photo.jpg` becomes `photo_wm.jpg`.
///
/// Unrecognized extensions switch to PNG so the alpha-capable default
/// format is always writable.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("watermarked");

    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .filter(|e| SUPPORTED_EXTENSIONS.contains(&e.as_str()))
        .unwrap_or_else(|| "png".to_string());

    input.with_file_name(format!("{}_wm.{}", stem, extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    // Test: Output naming appends _wm and keeps supported extensions
    #[test]
    fn test_default_output_path_keeps_supported_extension() {
        let path = default_output_path(Path::new("/photos/holiday.jpg"));
        assert_eq!(path, PathBuf::from("/photos/holiday_wm.jpg"));

        let path = default_output_path(Path::new("shot.PNG"));
        assert_eq!(path, PathBuf::from("shot_wm.png"));
    }

    #[test]
    fn test_default_output_path_falls_back_to_png() {
        let path = default_output_path(Path::new("scan.tiff"));
        assert_eq!(path, PathBuf::from("scan_wm.png"));

        let path = default_output_path(Path::new("noext"));
        assert_eq!(path, PathBuf::from("noext_wm.png"));
    }

    #[test]
    fn test_load_image_missing_file() {
        let err = load_image(Path::new("/nonexistent/photo.png")).unwrap_err();
        assert!(matches!(err, WatermarkError::Io(_)));
    }

    // Test: PNG round-trip preserves pixels
    #[test]
    fn test_save_and_reload_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let mut img = RgbaImage::new(16, 16);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgba([(x * 16) as u8, (y * 16) as u8, 7, 255]);
        }
        let original = DynamicImage::ImageRgba8(img);

        save_image(&original, &path).unwrap();
        let loaded = load_image(&path).unwrap();

        assert_eq!(loaded.width(), 16);
        assert_eq!(loaded.height(), 16);
        assert_eq!(loaded.to_rgba8().as_raw(), original.to_rgba8().as_raw());
    }

    // Test: JPEG output flattens the alpha channel
    #[test]
    fn test_save_jpeg_flattens_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");

        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            8,
            8,
            Rgba([200, 100, 50, 128]),
        ));

        save_image(&img, &path).unwrap();
        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.width(), 8);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.png");

        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255])));
        save_image(&img, &path).unwrap();

        assert!(path.exists());
    }
}
