//! # lathe-mesh
//!
//! Procedural cone meshes with swappable flat/smooth normal sets.
//!
//! ## Key Types
//!
//! - [`ConeMesh`] — The generated artifact. Flat triangle list with
//!   positions, two precomputed normal sets, colors, and texture
//!   coordinates, one triangle per angular segment.
//! - [`ConeParams`] — Validated generation parameters.
//! - [`NormalSet`] — Selects which normal set feeds the active buffer
//!   (flat per-face or smoothed per-vertex shading).

pub mod cone;
pub mod mesh;
pub mod normals;

pub use cone::{cone, ConeParams};
pub use mesh::ConeMesh;
pub use normals::NormalSet;
