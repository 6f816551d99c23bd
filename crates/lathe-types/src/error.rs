//! Error types for the Lathe toolkit.
//!
//! All crates return `LatheResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the Lathe toolkit.
#[derive(Debug, Error)]
pub enum LatheError {
    /// Generation parameter is out of valid range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Normalizing a zero-length vector during normal computation.
    ///
    /// Cannot occur for valid cone parameters, but the division is
    /// guarded rather than left to produce NaN buffers.
    #[error("Triangle {triangle} produced a zero-length normal")]
    ZeroLengthNormal { triangle: usize },

    /// Operation on a mesh whose GPU resources were already freed.
    #[error("Resource already released: {0}")]
    ResourceReleased(String),

    /// Backend-side failure (unknown handle, buffer size mismatch).
    #[error("GPU error: {0}")]
    Gpu(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, LatheError>`.
pub type LatheResult<T> = Result<T, LatheError>;
