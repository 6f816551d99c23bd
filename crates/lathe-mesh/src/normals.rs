//! Normal-set derivation for the cone triangle fan.
//!
//! Every cone mesh carries two precomputed normal sets: the flat per-face
//! set (one normal repeated across each triangle) and a smoothed per-vertex
//! set averaged between neighboring faces. Keeping both lets shading mode
//! switch at runtime without touching the geometry.

use glam::Vec3;
use lathe_types::{LatheError, LatheResult};
use serde::{Deserialize, Serialize};

/// Which precomputed normal set feeds the active normal buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalSet {
    /// Flat shading — the face normal repeated at all three vertices.
    Face,
    /// Smooth shading — ring normals averaged across adjacent faces.
    Vertex,
}

/// Derives the smoothed per-vertex normal set from per-triangle face normals.
///
/// For triangle `i`, the ring vertex shared with triangle `i-1` gets the
/// normalized average of the two face normals, and likewise the vertex
/// shared with `i+1` (both wrap around the ring). The apex entry is fixed
/// at (0, 1, 0) — the conventional approximation for a cone tip, where the
/// true surface normal is undefined.
///
/// Output is flattened `[x, y, z]` triples in the same
/// apex/left-ring/right-ring order as the position buffer.
pub fn smooth_ring_normals(face_normals: &[Vec3]) -> LatheResult<Vec<f32>> {
    let segments = face_normals.len();
    let mut out = Vec::with_capacity(segments * 9);

    for i in 0..segments {
        let prev = face_normals[if i == 0 { segments - 1 } else { i - 1 }];
        let this = face_normals[i];
        let next = face_normals[if i == segments - 1 { 0 } else { i + 1 }];

        let left = average_unit(prev, this, i)?;
        let right = average_unit(this, next, i)?;

        out.extend_from_slice(&[0.0, 1.0, 0.0]);
        out.extend_from_slice(&[left.x, left.y, left.z]);
        out.extend_from_slice(&[right.x, right.y, right.z]);
    }

    Ok(out)
}

/// Midpoint of two unit vectors, renormalized.
///
/// Fails only if the inputs are exactly opposed, which valid cone
/// geometry cannot produce (adjacent faces are less than 180° apart).
fn average_unit(a: Vec3, b: Vec3, triangle: usize) -> LatheResult<Vec3> {
    ((a + b) * 0.5)
        .try_normalize()
        .ok_or(LatheError::ZeroLengthNormal { triangle })
}
