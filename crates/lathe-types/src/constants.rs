//! Generation defaults and numeric thresholds.

use crate::color::Rgba;

/// Default angular segment count for generated cones.
pub const DEFAULT_SEGMENTS: u32 = 32;

/// Default base-circle radius (model units).
pub const DEFAULT_RADIUS: f32 = 0.5;

/// Default half-height; the cone spans y = -0.5 to y = +0.5.
pub const DEFAULT_HALF_HEIGHT: f32 = 0.5;

/// Default vertex color (opaque light gray).
pub const DEFAULT_BASE_COLOR: Rgba = Rgba::new(0.8, 0.8, 0.8, 1.0);

/// Tolerance for unit-length normal checks.
pub const NORMAL_TOLERANCE: f32 = 1.0e-5;

/// Largest segment count addressable with 16-bit indices
/// (three vertices per segment, `u16::MAX / 3`).
pub const MAX_SEGMENTS: u32 = u16::MAX as u32 / 3;
