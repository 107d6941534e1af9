//! Diagonal repeating pattern generation.
//!
//! Takes a rendered text tile and produces a canvas-sized raster fully
//! covered by rotated copies of it:
//!
//! 1. rotate the tile by the requested angle, expanding its bounding box;
//! 2. derive the placement lattice from canvas size, tile size, angle and
//!    density;
//! 3. stamp the rotated tile at every lattice position onto a working
//!    canvas oversized by one tile on each side, so rotation growth and
//!    lattice phase never starve the edges;
//! 4. center-crop the working canvas to the exact target size.
//!
//! The output keeps full alpha; fading to the requested opacity is the
//! caller's step.

use crate::compositor::composite_over;
use crate::error::WatermarkError;
use crate::lattice::LatticeSpec;
use crate::raster::{crop_centered, rotate_expanded};
use image::RgbaImage;

/// Render the repeating diagonal pattern for a canvas of the given size.
///
/// The stamping loop is the hot path: `O(lines * tiles_per_line)` raster
/// composites, each proportional to the tile area. It runs as a single
/// synchronous bulk operation with one owner for every buffer involved.
pub fn render_pattern(
    tile: &RgbaImage,
    canvas_width: u32,
    canvas_height: u32,
    angle_degrees: f32,
    density: f32,
) -> Result<RgbaImage, WatermarkError> {
    if canvas_width == 0 || canvas_height == 0 {
        return Err(WatermarkError::InvalidParameter {
            param: "canvas".to_string(),
            message: format!(
                "canvas dimensions must be positive, got {}x{}",
                canvas_width, canvas_height
            ),
        });
    }

    let (tile_width, tile_height) = tile.dimensions();
    if tile_width == 0 || tile_height == 0 {
        return Err(WatermarkError::EmptyWatermark);
    }

    // Parameters are validated before any raster work happens
    let lattice = LatticeSpec::compute(
        (canvas_width, canvas_height),
        (tile_width, tile_height),
        angle_degrees,
        density,
    )?;

    let rotated = rotate_expanded(tile, angle_degrees);

    // Oversized so the crop always has valid source pixels regardless of
    // rotation growth or lattice phase
    let working_width = canvas_width + 2 * tile_width;
    let working_height = canvas_height + 2 * tile_height;
    let mut working = RgbaImage::new(working_width, working_height);

    let positions = lattice.positions(rotated.dimensions(), (working_width, working_height));
    for pos in &positions {
        composite_over(&mut working, &rotated, pos.x, pos.y);
    }

    tracing::debug!(
        stamps = positions.len(),
        spacing = lattice.spacing,
        rotated_width = rotated.width(),
        rotated_height = rotated.height(),
        "Stamped watermark lattice"
    );

    Ok(crop_centered(&working, canvas_width, canvas_height))
}
