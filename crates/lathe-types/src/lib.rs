//! # lathe-types
//!
//! Shared types, identifiers, error types, and generation defaults
//! for the Lathe mesh toolkit.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Lathe crates share.

pub mod color;
pub mod constants;
pub mod error;
pub mod ids;

pub use color::Rgba;
pub use error::{LatheError, LatheResult};
pub use ids::{MeshHandle, ShaderId};
