//! # lathe-gpu
//!
//! Rendering-backend boundary for the Lathe mesh toolkit.
//!
//! Geometry generation is pure; this crate owns everything on the other
//! side of that line:
//! - [`PackedLayout`] — byte offsets for the single packed vertex buffer
//!   (positions → normals → colors → tex coords).
//! - [`MeshBackend`] — the upload / partial-update / draw / release
//!   contract a renderer implements.
//! - [`HeadlessBackend`] — in-memory reference implementation that records
//!   uploads and draw calls, used by tests and benchmarks.

pub mod backend;
pub mod layout;

pub use backend::{HeadlessBackend, MeshBackend};
pub use layout::{pack_vertex_data, PackedLayout};
