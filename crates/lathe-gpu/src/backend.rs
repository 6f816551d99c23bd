//! Mesh backend trait and headless reference implementation.
//!
//! The [`MeshBackend`] trait is the seam between pure geometry and a real
//! renderer: upload once, partially re-upload normals after a shading
//! switch, draw, and release exactly once. [`HeadlessBackend`] implements
//! the contract entirely in memory, recording enough state for tests and
//! benchmarks to observe what a GPU backend would have done.

use lathe_mesh::ConeMesh;
use lathe_types::{LatheError, LatheResult, MeshHandle, ShaderId};

use crate::layout::{pack_vertex_data, PackedLayout};

/// Rendering-backend contract for cone meshes.
///
/// Ordering rules, enforced by implementations:
/// - `upload` must complete before `draw` or `update_normals` on a handle.
/// - `release` is valid exactly once; any later operation on the handle
///   fails with [`LatheError::ResourceReleased`].
pub trait MeshBackend {
    /// Allocates buffers for the mesh and uploads all vertex and index
    /// data in packed layout order. Validates the mesh first.
    fn upload(&mut self, mesh: &ConeMesh) -> LatheResult<MeshHandle>;

    /// Rewrites only the normal region of the packed vertex buffer from
    /// the mesh's active normal set, then clears the mesh's dirty flag.
    /// Positions, colors, and texture coordinates stay resident.
    fn update_normals(&mut self, handle: MeshHandle, mesh: &mut ConeMesh) -> LatheResult<()>;

    /// Issues an indexed triangle-list draw with the given shader.
    fn draw(&mut self, handle: MeshHandle, shader: ShaderId) -> LatheResult<()>;

    /// Frees the mesh's buffers.
    fn release(&mut self, handle: MeshHandle) -> LatheResult<()>;
}

/// Backend-side state for one uploaded mesh.
#[derive(Debug)]
struct MeshSlot {
    layout: PackedLayout,
    vertex_data: Vec<f32>,
    index_data: Vec<u16>,
    normal_uploads: u32,
    draw_calls: u32,
    last_shader: Option<ShaderId>,
    released: bool,
}

/// In-memory backend — records uploads and draws without a GPU.
///
/// Used for:
/// - Exercising the backend contract in tests and CI
/// - Inspecting exactly what a real backend would have resident
///   (packed vertex data, index data, per-handle counters)
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    slots: Vec<MeshSlot>,
}

impl HeadlessBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the packed vertex data held for a live handle.
    pub fn vertex_data(&self, handle: MeshHandle) -> Option<&[f32]> {
        self.slots
            .get(handle.index())
            .filter(|slot| !slot.released)
            .map(|slot| slot.vertex_data.as_slice())
    }

    /// Returns the index data held for a live handle.
    pub fn index_data(&self, handle: MeshHandle) -> Option<&[u16]> {
        self.slots
            .get(handle.index())
            .filter(|slot| !slot.released)
            .map(|slot| slot.index_data.as_slice())
    }

    /// Returns the layout recorded at upload time.
    pub fn layout(&self, handle: MeshHandle) -> Option<PackedLayout> {
        self.slots.get(handle.index()).map(|slot| slot.layout)
    }

    /// Number of draw calls issued for a handle.
    pub fn draw_calls(&self, handle: MeshHandle) -> u32 {
        self.slots.get(handle.index()).map_or(0, |s| s.draw_calls)
    }

    /// Number of partial normal re-uploads for a handle.
    pub fn normal_uploads(&self, handle: MeshHandle) -> u32 {
        self.slots.get(handle.index()).map_or(0, |s| s.normal_uploads)
    }

    /// Shader used by the most recent draw on a handle.
    pub fn last_shader(&self, handle: MeshHandle) -> Option<ShaderId> {
        self.slots.get(handle.index()).and_then(|s| s.last_shader)
    }

    /// Returns true if the handle's buffers were freed.
    pub fn is_released(&self, handle: MeshHandle) -> bool {
        self.slots.get(handle.index()).is_some_and(|s| s.released)
    }

    fn slot_mut(&mut self, handle: MeshHandle) -> LatheResult<&mut MeshSlot> {
        let slot = self
            .slots
            .get_mut(handle.index())
            .ok_or_else(|| LatheError::Gpu(format!("Unknown mesh handle {}", handle.0)))?;
        if slot.released {
            return Err(LatheError::ResourceReleased(format!(
                "mesh handle {}",
                handle.0
            )));
        }
        Ok(slot)
    }
}

impl MeshBackend for HeadlessBackend {
    fn upload(&mut self, mesh: &ConeMesh) -> LatheResult<MeshHandle> {
        mesh.validate()?;
        let handle = MeshHandle(self.slots.len() as u32);
        self.slots.push(MeshSlot {
            layout: PackedLayout::for_mesh(mesh),
            vertex_data: pack_vertex_data(mesh),
            index_data: mesh.indices.clone(),
            normal_uploads: 0,
            draw_calls: 0,
            last_shader: None,
            released: false,
        });
        Ok(handle)
    }

    fn update_normals(&mut self, handle: MeshHandle, mesh: &mut ConeMesh) -> LatheResult<()> {
        let slot = self.slot_mut(handle)?;
        let range = slot.layout.normal_float_range();
        let normals = mesh.active_normals();
        if normals.len() != range.len() {
            return Err(LatheError::Gpu(format!(
                "Normal region size mismatch: buffer holds {} floats, mesh provides {}",
                range.len(),
                normals.len()
            )));
        }
        slot.vertex_data[range].copy_from_slice(normals);
        slot.normal_uploads += 1;
        mesh.mark_normals_clean();
        Ok(())
    }

    fn draw(&mut self, handle: MeshHandle, shader: ShaderId) -> LatheResult<()> {
        let slot = self.slot_mut(handle)?;
        slot.draw_calls += 1;
        slot.last_shader = Some(shader);
        Ok(())
    }

    fn release(&mut self, handle: MeshHandle) -> LatheResult<()> {
        let slot = self
            .slots
            .get_mut(handle.index())
            .ok_or_else(|| LatheError::Gpu(format!("Unknown mesh handle {}", handle.0)))?;
        if slot.released {
            return Err(LatheError::ResourceReleased(format!(
                "mesh handle {} released twice",
                handle.0
            )));
        }
        slot.vertex_data = Vec::new();
        slot.index_data = Vec::new();
        slot.released = true;
        Ok(())
    }
}
