//! Placement lattice for the repeating watermark pattern.
//!
//! The pattern is laid out on a skewed grid: a primary step vector runs
//! along the tiling direction at the requested angle, and a perpendicular
//! row vector offsets successive lines. Rows run perpendicular to the
//! text's own rotation, so the text reads consistently along diagonals.
//!
//! Spacing is driven by the user-facing density: higher density means
//! tighter spacing. The inverted factor is clamped so extreme densities
//! can neither explode the stamp count nor empty the canvas.

use crate::constants::{
    LINE_LENGTH_MARGIN, SPACING_FACTOR_MAX, SPACING_FACTOR_MIN, SPACING_TILE_MULTIPLE,
};
use crate::error::WatermarkError;
use std::f64::consts::FRAC_PI_2;

/// A single position where a tile should be stamped.
///
/// Coordinates are the tile's top-left corner and may be negative:
/// tiles hanging off the canvas edge are clipped while stamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementPosition {
    pub x: i32,
    pub y: i32,
}

impl PlacementPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Derived lattice geometry for one pattern request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticeSpec {
    /// Distance between neighboring stamps in pixels.
    pub spacing: u32,
    /// Step vector along the tiling direction.
    pub step: (i32, i32),
    /// Step vector between successive lines, perpendicular to `step`.
    pub row_step: (i32, i32),
    /// Lines walked on each side of the origin.
    pub line_count: i32,
    /// Stamps attempted per line.
    pub tiles_per_line: i32,
}

impl LatticeSpec {
    /// Derive the lattice for a canvas, tile and pattern style.
    ///
    /// Fails fast with [`WatermarkError::InvalidParameter`] when `density`
    /// is outside `(0, 1]`.
    pub fn compute(
        canvas: (u32, u32),
        tile: (u32, u32),
        angle_degrees: f32,
        density: f32,
    ) -> Result<Self, WatermarkError> {
        if !(density > 0.0 && density <= 1.0) {
            return Err(WatermarkError::InvalidParameter {
                param: "density".to_string(),
                message: format!("must be in (0, 1], got {}", density),
            });
        }

        let diagonal = (canvas.0 as f64).hypot(canvas.1 as f64);

        // Invert density: higher density means smaller spacing
        let spacing_factor = (1.0 - density).clamp(SPACING_FACTOR_MIN, SPACING_FACTOR_MAX);
        let base = tile.0.max(tile.1) as f32;
        let spacing = ((base * SPACING_TILE_MULTIPLE * spacing_factor).round() as i64).max(1) as u32;

        let theta = (angle_degrees as f64).to_radians();
        let s = spacing as f64;

        let step = (
            (s * theta.cos()).round() as i32,
            (s * theta.sin()).round() as i32,
        );
        let row_step = (
            (s * (theta + FRAC_PI_2).cos()).round() as i32,
            (s * (theta + FRAC_PI_2).sin()).round() as i32,
        );

        // Doubled for margin against truncation; at least one row pair
        // even when the tile dwarfs the canvas
        let line_count = (((diagonal / s) as i32) * 2).max(1);
        let tiles_per_line = ((diagonal * LINE_LENGTH_MARGIN / s) as i32) + 1;

        Ok(Self {
            spacing,
            step,
            row_step,
            line_count,
            tiles_per_line,
        })
    }

    /// Walk the lattice and collect every stamp position whose footprint
    /// could overlap the working canvas.
    ///
    /// `rotated` is the rotated tile's size, `working` the oversized
    /// canvas size. The bounds check errs toward over-inclusion near the
    /// edges; a few clipped stamps are cheap, a skipped one leaves a gap.
    pub fn positions(&self, rotated: (u32, u32), working: (u32, u32)) -> Vec<PlacementPosition> {
        let rw = rotated.0 as i32;
        let rh = rotated.1 as i32;
        let work_w = working.0 as i32;
        let work_h = working.1 as i32;

        let mut positions = Vec::new();

        for i in -self.line_count..self.line_count {
            let line_start_x = -rw + i * self.row_step.0;
            let line_start_y = -rh + i * self.row_step.1;

            for j in 0..self.tiles_per_line {
                let x = line_start_x + j * self.step.0;
                let y = line_start_y + j * self.step.1;

                if x >= -rw && x <= work_w && y >= -rh && y <= work_h {
                    positions.push(PlacementPosition::new(x, y));
                }
            }
        }

        positions
    }
}
