//! Strongly-typed handles for backend-side resources.
//!
//! Newtype wrappers prevent accidental mixing of mesh handles
//! with shader program identifiers.

use serde::{Deserialize, Serialize};

/// Handle to a mesh's backend-side buffer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshHandle(pub u32);

/// Identifier of a compiled shader program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShaderId(pub u32);

impl MeshHandle {
    /// Returns the raw index as `usize` for slot lookup.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl ShaderId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for MeshHandle {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<u32> for ShaderId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
