//! Integration tests for lathe-types.

use lathe_types::{LatheError, MeshHandle, Rgba, ShaderId};

// ─── Handle Tests ─────────────────────────────────────────────

#[test]
fn mesh_handle_index() {
    let handle = MeshHandle(42);
    assert_eq!(handle.index(), 42);
}

#[test]
fn handles_are_not_interchangeable() {
    // Compile-time guarantee — these types are distinct.
    let _m = MeshHandle(0);
    let _s = ShaderId(0);
}

#[test]
fn handles_are_serializable() {
    let handle = MeshHandle(100);
    let json = serde_json::to_string(&handle).unwrap();
    let deserialized: MeshHandle = serde_json::from_str(&json).unwrap();
    assert_eq!(handle, deserialized);
}

// ─── Color Tests ──────────────────────────────────────────────

#[test]
fn color_to_array() {
    let c = Rgba::new(0.1, 0.2, 0.3, 1.0);
    assert_eq!(c.to_array(), [0.1, 0.2, 0.3, 1.0]);
}

#[test]
fn color_finite_check() {
    assert!(Rgba::new(0.0, 0.5, 1.0, 1.0).is_finite());
    assert!(!Rgba::new(f32::NAN, 0.5, 1.0, 1.0).is_finite());
    assert!(!Rgba::new(0.0, f32::INFINITY, 1.0, 1.0).is_finite());
}

#[test]
fn color_from_array() {
    let c = Rgba::from([0.8, 0.8, 0.8, 1.0]);
    assert_eq!(c, lathe_types::constants::DEFAULT_BASE_COLOR);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = LatheError::InvalidParameter("segments must be at least 3 (got 2)".into());
    assert!(err.to_string().contains("segments must be at least 3"));
}

#[test]
fn zero_length_normal_display() {
    let err = LatheError::ZeroLengthNormal { triangle: 7 };
    assert!(err.to_string().contains('7'));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: LatheError = io.into();
    assert!(matches!(err, LatheError::Io(_)));
}
