//! Procedural cone generator.
//!
//! Produces a deterministic flat triangle list for a right circular cone:
//! apex at (0, +half_height, 0), circular base at y = -half_height,
//! one triangle per angular segment with consistent winding
//! (apex, ring point at angle i, ring point at angle i+1).

use std::f32::consts::TAU;

use glam::Vec3;

use lathe_types::constants::{
    DEFAULT_BASE_COLOR, DEFAULT_HALF_HEIGHT, DEFAULT_RADIUS, DEFAULT_SEGMENTS, MAX_SEGMENTS,
};
use lathe_types::{LatheError, LatheResult, Rgba};

use crate::mesh::ConeMesh;
use crate::normals::smooth_ring_normals;

/// Validated cone generation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeParams {
    /// Number of angular slices around the base circle. Minimum 3.
    pub segments: u32,
    /// Base-circle radius. Must be positive and finite.
    pub radius: f32,
    /// Half of the cone's height. Must be positive and finite.
    pub half_height: f32,
    /// Color applied to every vertex. Components must be finite.
    pub color: Rgba,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            segments: DEFAULT_SEGMENTS,
            radius: DEFAULT_RADIUS,
            half_height: DEFAULT_HALF_HEIGHT,
            color: DEFAULT_BASE_COLOR,
        }
    }
}

impl ConeParams {
    /// Rejects parameter combinations that would produce degenerate or
    /// NaN-laden geometry.
    pub fn validate(&self) -> LatheResult<()> {
        if self.segments < 3 {
            return Err(LatheError::InvalidParameter(format!(
                "segments must be at least 3 (got {})",
                self.segments
            )));
        }
        if self.segments > MAX_SEGMENTS {
            return Err(LatheError::InvalidParameter(format!(
                "segments must be at most {} to fit 16-bit indices (got {})",
                MAX_SEGMENTS, self.segments
            )));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(LatheError::InvalidParameter(format!(
                "radius must be positive and finite (got {})",
                self.radius
            )));
        }
        if !self.half_height.is_finite() || self.half_height <= 0.0 {
            return Err(LatheError::InvalidParameter(format!(
                "half_height must be positive and finite (got {})",
                self.half_height
            )));
        }
        if !self.color.is_finite() {
            return Err(LatheError::InvalidParameter(
                "color components must be finite".into(),
            ));
        }
        Ok(())
    }
}

/// Generates a cone mesh from validated parameters.
///
/// Each of the `segments` triangles carries its own copy of the apex and
/// two ring vertices, so the flat and smooth normal sets can differ
/// per-vertex. Both sets are derived here; the active buffer starts on
/// the flat (face) set.
///
/// # Example
/// ```
/// use lathe_mesh::{cone, ConeParams};
/// let mesh = cone(&ConeParams { segments: 8, ..Default::default() }).unwrap();
/// assert_eq!(mesh.vertex_count(), 24);  // 3 vertices per segment
/// assert_eq!(mesh.triangle_count(), 8);
/// ```
pub fn cone(params: &ConeParams) -> LatheResult<ConeMesh> {
    params.validate()?;

    let segments = params.segments as usize;
    let step = TAU / params.segments as f32;
    let r = params.radius;
    let half_h = params.half_height;
    let color = params.color.to_array();

    let mut positions = Vec::with_capacity(segments * 9);
    let mut face_normals = Vec::with_capacity(segments * 9);
    let mut colors = Vec::with_capacity(segments * 12);
    let mut tex_coords = Vec::with_capacity(segments * 6);
    let mut indices = Vec::with_capacity(segments * 3);
    let mut face_vecs: Vec<Vec3> = Vec::with_capacity(segments);

    let height = 2.0 * half_h;

    for i in 0..segments {
        let angle0 = i as f32 * step;
        let angle1 = (i + 1) as f32 * step;

        positions.extend_from_slice(&[
            0.0,
            half_h,
            0.0,
            r * angle0.cos(),
            -half_h,
            r * angle0.sin(),
            r * angle1.cos(),
            -half_h,
            r * angle1.sin(),
        ]);

        // Cross product of the two apex-to-ring edges, reduced
        // algebraically. The y term collapses to sin(a1 - a0) via the
        // angle-difference identity.
        let normal = Vec3::new(
            height * r * (angle1.sin() - angle0.sin()),
            r * r * (angle1 - angle0).sin(),
            height * r * (angle0.cos() - angle1.cos()),
        )
        .try_normalize()
        .ok_or(LatheError::ZeroLengthNormal { triangle: i })?;

        for _ in 0..3 {
            face_normals.extend_from_slice(&[normal.x, normal.y, normal.z]);
            colors.extend_from_slice(&color);
        }
        tex_coords.extend_from_slice(&[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);

        let base = (i * 3) as u16;
        indices.extend_from_slice(&[base, base + 1, base + 2]);

        face_vecs.push(normal);
    }

    let vertex_normals = smooth_ring_normals(&face_vecs)?;

    Ok(ConeMesh::from_parts(
        params.segments,
        params.radius,
        params.half_height,
        params.color,
        positions,
        face_normals,
        vertex_normals,
        colors,
        tex_coords,
        indices,
    ))
}
