//! Packed vertex-buffer layout.
//!
//! All vertex attributes share one buffer, packed contiguously in the
//! order positions → normals → colors → tex coords. The layout is a pure
//! function of the mesh, so the uploader and any partial-update path
//! agree on region offsets without coordination.

use std::mem::size_of;
use std::ops::Range;

use lathe_mesh::ConeMesh;

/// Byte offsets and sizes of the packed vertex buffer regions.
///
/// Offsets are in bytes, mirroring what a graphics API's sub-buffer
/// upload takes. Attribute data is entirely `f32`, so byte offsets
/// divide evenly into float indices (see [`normal_float_range`]).
///
/// [`normal_float_range`]: PackedLayout::normal_float_range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedLayout {
    /// Start of the position region. Always 0.
    pub position_offset: usize,
    /// Start of the normal region (end of positions).
    pub normal_offset: usize,
    /// Start of the color region.
    pub color_offset: usize,
    /// Start of the texture-coordinate region.
    pub tex_coord_offset: usize,
    /// Total vertex buffer size in bytes.
    pub vertex_bytes: usize,
    /// Index buffer size in bytes (16-bit indices).
    pub index_bytes: usize,
}

impl PackedLayout {
    /// Computes the layout for a mesh's current buffers.
    pub fn for_mesh(mesh: &ConeMesh) -> Self {
        let f = size_of::<f32>();
        let position_bytes = mesh.positions.len() * f;
        let normal_bytes = mesh.active_normals().len() * f;
        let color_bytes = mesh.colors.len() * f;
        let tex_coord_bytes = mesh.tex_coords.len() * f;

        let position_offset = 0;
        let normal_offset = position_offset + position_bytes;
        let color_offset = normal_offset + normal_bytes;
        let tex_coord_offset = color_offset + color_bytes;

        Self {
            position_offset,
            normal_offset,
            color_offset,
            tex_coord_offset,
            vertex_bytes: tex_coord_offset + tex_coord_bytes,
            index_bytes: mesh.indices.len() * size_of::<u16>(),
        }
    }

    /// The normal region as float indices into the packed buffer.
    ///
    /// This is the only region rewritten when the active normal set
    /// changes; everything else stays resident.
    pub fn normal_float_range(&self) -> Range<usize> {
        let f = size_of::<f32>();
        (self.normal_offset / f)..(self.color_offset / f)
    }
}

/// Packs the mesh's vertex attributes into one contiguous float buffer
/// in layout order. The normal region holds the *active* set.
pub fn pack_vertex_data(mesh: &ConeMesh) -> Vec<f32> {
    let mut data = Vec::with_capacity(
        mesh.positions.len()
            + mesh.active_normals().len()
            + mesh.colors.len()
            + mesh.tex_coords.len(),
    );
    data.extend_from_slice(&mesh.positions);
    data.extend_from_slice(mesh.active_normals());
    data.extend_from_slice(&mesh.colors);
    data.extend_from_slice(&mesh.tex_coords);
    data
}
