// Constants module - centralized default values for watermark styling
// and pattern geometry.
//
// Using constants instead of magic numbers improves maintainability
// and makes it easier to understand and modify defaults.

// =============================================================================
// Text styling defaults
// =============================================================================

/// Default font size in pixels
pub const DEFAULT_FONT_SIZE: u32 = 24;

/// Default text fill color (white)
pub const DEFAULT_FILL_COLOR: &str = "#ffffff";

/// Default text outline color (black)
pub const DEFAULT_OUTLINE_COLOR: &str = "#000000";

/// Default outline width in pixels
pub const DEFAULT_OUTLINE_WIDTH: u32 = 1;

// =============================================================================
// Pattern defaults
// =============================================================================

/// Default rotation angle of the repeated text in degrees
pub const DEFAULT_ANGLE_DEGREES: f32 = 45.0;

/// Default pattern density; higher values pack the text tighter
pub const DEFAULT_DENSITY: f32 = 0.5;

/// Default watermark opacity
pub const DEFAULT_OPACITY: f32 = 0.3;

// =============================================================================
// Pattern geometry
// =============================================================================

/// Base spacing between repeats as a multiple of the larger tile dimension
pub const SPACING_TILE_MULTIPLE: f32 = 2.5;

/// Floor for the inverted-density spacing factor; keeps high densities
/// from collapsing spacing toward zero and exploding the stamp count
pub const SPACING_FACTOR_MIN: f32 = 0.2;

/// Ceiling for the spacing factor; keeps low densities from spacing the
/// pattern out of the canvas entirely
pub const SPACING_FACTOR_MAX: f32 = 1.0;

/// Over-provisioning factor for the per-line tile count, covering lines
/// that cross the canvas at shallow angles
pub const LINE_LENGTH_MARGIN: f64 = 1.5;
