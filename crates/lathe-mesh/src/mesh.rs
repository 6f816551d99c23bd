//! The generated cone mesh and its normal-set selection state.
//!
//! The mesh is a flat (non-shared-vertex) triangle list: every angular
//! segment contributes its own apex and two ring vertices, so the two
//! normal sets can disagree per-vertex without any re-indexing. All
//! attribute arrays are flattened component buffers indexed
//! triangle-then-vertex, ready for contiguous packing by the backend.

use serde::{Deserialize, Serialize};

use lathe_types::constants::NORMAL_TOLERANCE;
use lathe_types::{LatheError, LatheResult, Rgba};

use crate::normals::NormalSet;

/// A right circular cone tessellated into a flat triangle list.
///
/// Immutable after generation except for [`select_normal_set`], which
/// swaps which precomputed normal set occupies the active buffer and
/// flags it for partial re-upload by the backend.
///
/// [`select_normal_set`]: ConeMesh::select_normal_set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConeMesh {
    /// Angular segment count the mesh was generated with.
    pub segments: u32,
    /// Base-circle radius.
    pub radius: f32,
    /// Half of the cone's height; apex at `+half_height`, base ring at `-half_height`.
    pub half_height: f32,
    /// Color applied to every vertex.
    pub base_color: Rgba,

    /// Vertex positions, flattened `[x, y, z]` — `9 × segments` floats.
    pub positions: Vec<f32>,
    /// Flat-shading normals, the face normal repeated per triangle vertex.
    pub face_normals: Vec<f32>,
    /// Smooth-shading normals; apex entries are always (0, 1, 0).
    pub vertex_normals: Vec<f32>,
    /// Vertex colors, flattened `[r, g, b, a]` — `12 × segments` floats.
    pub colors: Vec<f32>,
    /// Texture coordinates, the fixed (0,0), (0,1), (1,1) triple per triangle.
    pub tex_coords: Vec<f32>,
    /// Triangle indices, `(3i, 3i+1, 3i+2)` per triangle.
    pub indices: Vec<u16>,

    // Active normal slot: a copy of one of the backing sets above.
    active_normals: Vec<f32>,
    active_set: NormalSet,
    #[serde(skip)]
    normals_dirty: bool,
}

impl ConeMesh {
    /// Assembles a mesh from generated buffers. The active slot starts as
    /// a copy of the face set (flat shading), not yet dirty.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        segments: u32,
        radius: f32,
        half_height: f32,
        base_color: Rgba,
        positions: Vec<f32>,
        face_normals: Vec<f32>,
        vertex_normals: Vec<f32>,
        colors: Vec<f32>,
        tex_coords: Vec<f32>,
        indices: Vec<u16>,
    ) -> Self {
        let active_normals = face_normals.clone();
        Self {
            segments,
            radius,
            half_height,
            base_color,
            positions,
            face_normals,
            vertex_normals,
            colors,
            tex_coords,
            indices,
            active_normals,
            active_set: NormalSet::Face,
            normals_dirty: false,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the position of vertex `i` as `[x, y, z]`.
    #[inline]
    pub fn position(&self, i: usize) -> [f32; 3] {
        [
            self.positions[i * 3],
            self.positions[i * 3 + 1],
            self.positions[i * 3 + 2],
        ]
    }

    /// Returns the position of vertex `i` as a `glam::Vec3`.
    #[inline]
    pub fn position_vec3(&self, i: usize) -> glam::Vec3 {
        glam::Vec3::new(
            self.positions[i * 3],
            self.positions[i * 3 + 1],
            self.positions[i * 3 + 2],
        )
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u16; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Returns the currently selected normal set.
    #[inline]
    pub fn active_set(&self) -> NormalSet {
        self.active_set
    }

    /// Returns the active normal buffer (what the backend uploads).
    #[inline]
    pub fn active_normals(&self) -> &[f32] {
        &self.active_normals
    }

    /// Copies the chosen backing normal set into the active buffer.
    ///
    /// No geometry is recomputed; both sets were derived at generation
    /// time. Marks the normal buffer dirty so the backend re-uploads
    /// only that region on its next `update_normals` call.
    pub fn select_normal_set(&mut self, set: NormalSet) {
        let source = match set {
            NormalSet::Face => &self.face_normals,
            NormalSet::Vertex => &self.vertex_normals,
        };
        self.active_normals.copy_from_slice(source);
        self.active_set = set;
        self.normals_dirty = true;
    }

    /// Returns true if the active normals changed since the last upload.
    #[inline]
    pub fn normals_dirty(&self) -> bool {
        self.normals_dirty
    }

    /// Clears the dirty flag. Called by the backend after a normal re-upload.
    #[inline]
    pub fn mark_normals_clean(&mut self) {
        self.normals_dirty = false;
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - All attribute arrays agree on the vertex count
    /// - Triangle indices are within bounds and non-degenerate
    /// - Every normal in both backing sets has unit length
    pub fn validate(&self) -> LatheResult<()> {
        if self.positions.len() % 3 != 0 {
            return Err(LatheError::InvalidMesh(
                "Position component count is not divisible by 3".into(),
            ));
        }
        let n = self.vertex_count();

        if self.face_normals.len() != n * 3
            || self.vertex_normals.len() != n * 3
            || self.active_normals.len() != n * 3
        {
            return Err(LatheError::InvalidMesh(
                "Normal arrays have inconsistent lengths".into(),
            ));
        }
        if self.colors.len() != n * 4 {
            return Err(LatheError::InvalidMesh(format!(
                "Color component count ({}) != 4 × vertex count ({})",
                self.colors.len(),
                n
            )));
        }
        if self.tex_coords.len() != n * 2 {
            return Err(LatheError::InvalidMesh(
                "Texture coordinate arrays have inconsistent lengths".into(),
            ));
        }

        if self.indices.len() % 3 != 0 {
            return Err(LatheError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }
        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(LatheError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }
        for t in 0..self.triangle_count() {
            let [a, b, c] = self.triangle(t);
            if a == b || b == c || a == c {
                return Err(LatheError::InvalidMesh(format!(
                    "Triangle {} has repeated vertex indices: [{}, {}, {}]",
                    t, a, b, c
                )));
            }
        }

        check_unit_normals(&self.face_normals, "face")?;
        check_unit_normals(&self.vertex_normals, "vertex")?;

        Ok(())
    }
}

fn check_unit_normals(normals: &[f32], set_name: &str) -> LatheResult<()> {
    for (i, chunk) in normals.chunks_exact(3).enumerate() {
        let len = (chunk[0] * chunk[0] + chunk[1] * chunk[1] + chunk[2] * chunk[2]).sqrt();
        if (len - 1.0).abs() > NORMAL_TOLERANCE {
            return Err(LatheError::InvalidMesh(format!(
                "{} normal {} has length {} (expected 1)",
                set_name, i, len
            )));
        }
    }
    Ok(())
}
