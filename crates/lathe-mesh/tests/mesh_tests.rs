//! Integration tests for lathe-mesh.

use lathe_mesh::{cone, ConeMesh, ConeParams, NormalSet};
use lathe_types::Rgba;

fn unit_cone(segments: u32) -> ConeMesh {
    cone(&ConeParams {
        segments,
        ..Default::default()
    })
    .unwrap()
}

fn normal_at(normals: &[f32], vertex: usize) -> [f32; 3] {
    [
        normals[vertex * 3],
        normals[vertex * 3 + 1],
        normals[vertex * 3 + 2],
    ]
}

// ─── Parameter Validation ─────────────────────────────────────

#[test]
fn rejects_too_few_segments() {
    for segments in [0, 1, 2] {
        let result = cone(&ConeParams {
            segments,
            ..Default::default()
        });
        assert!(result.is_err(), "segments={} should be rejected", segments);
    }
}

#[test]
fn rejects_segments_beyond_u16_indices() {
    let result = cone(&ConeParams {
        segments: 30_000,
        ..Default::default()
    });
    assert!(result.is_err());
}

#[test]
fn rejects_nonpositive_radius() {
    for radius in [0.0, -1.0, f32::NAN] {
        let result = cone(&ConeParams {
            radius,
            ..Default::default()
        });
        assert!(result.is_err(), "radius={} should be rejected", radius);
    }
}

#[test]
fn rejects_nonpositive_half_height() {
    for half_height in [0.0, -0.5, f32::INFINITY] {
        let result = cone(&ConeParams {
            half_height,
            ..Default::default()
        });
        assert!(result.is_err());
    }
}

#[test]
fn rejects_nonfinite_color() {
    let result = cone(&ConeParams {
        color: Rgba::new(0.5, f32::NAN, 0.5, 1.0),
        ..Default::default()
    });
    assert!(result.is_err());
}

#[test]
fn out_of_range_color_passes_through_unclamped() {
    let mesh = cone(&ConeParams {
        color: Rgba::new(1.5, -0.25, 0.0, 1.0),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(&mesh.colors[0..4], &[1.5, -0.25, 0.0, 1.0]);
}

// ─── Buffer Shapes ────────────────────────────────────────────

#[test]
fn buffer_lengths_scale_with_segments() {
    for segments in [3u32, 4, 7, 32, 100] {
        let s = segments as usize;
        let mesh = unit_cone(segments);
        assert_eq!(mesh.positions.len(), 9 * s);
        assert_eq!(mesh.face_normals.len(), 9 * s);
        assert_eq!(mesh.vertex_normals.len(), 9 * s);
        assert_eq!(mesh.colors.len(), 12 * s);
        assert_eq!(mesh.tex_coords.len(), 6 * s);
        assert_eq!(mesh.indices.len(), 3 * s);
        assert_eq!(mesh.vertex_count(), 3 * s);
        assert_eq!(mesh.triangle_count(), s);
    }
}

#[test]
fn indices_are_sequential_triples() {
    let mesh = unit_cone(16);
    for t in 0..mesh.triangle_count() {
        let base = (t * 3) as u16;
        assert_eq!(mesh.triangle(t), [base, base + 1, base + 2]);
    }
    let n = mesh.vertex_count() as u16;
    assert!(mesh.indices.iter().all(|&i| i < n));
}

#[test]
fn tex_coords_follow_fixed_pattern() {
    let mesh = unit_cone(5);
    for t in 0..mesh.triangle_count() {
        let base = t * 6;
        assert_eq!(
            &mesh.tex_coords[base..base + 6],
            &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]
        );
    }
}

#[test]
fn all_vertices_carry_base_color() {
    let color = Rgba::new(0.2, 0.4, 0.6, 0.8);
    let mesh = cone(&ConeParams {
        segments: 6,
        color,
        ..Default::default()
    })
    .unwrap();
    for chunk in mesh.colors.chunks_exact(4) {
        assert_eq!(chunk, &color.to_array());
    }
}

#[test]
fn generated_mesh_validates() {
    for segments in [3, 4, 32] {
        assert!(unit_cone(segments).validate().is_ok());
    }
}

// ─── Geometry ─────────────────────────────────────────────────

#[test]
fn minimum_cone_is_non_degenerate() {
    let mesh = unit_cone(3);
    assert_eq!(mesh.triangle_count(), 3);
    assert_eq!(mesh.vertex_count(), 9);
    assert_eq!(mesh.indices.len(), 9);
    // Within a triangle, no two positions coincide.
    for t in 0..3 {
        let a = mesh.position(t * 3);
        let b = mesh.position(t * 3 + 1);
        let c = mesh.position(t * 3 + 2);
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }
    assert!(mesh.validate().is_ok());
}

#[test]
fn first_triangle_of_four_segment_cone() {
    // angle0 = 0, angle1 = π/2
    let mesh = unit_cone(4);
    let apex = mesh.position(0);
    let base0 = mesh.position(1);
    let base1 = mesh.position(2);

    assert_eq!(apex, [0.0, 0.5, 0.0]);
    assert!((base0[0] - 0.5).abs() < 1e-6);
    assert!((base0[1] + 0.5).abs() < 1e-6);
    assert!(base0[2].abs() < 1e-6);
    assert!(base1[0].abs() < 1e-6);
    assert!((base1[1] + 0.5).abs() < 1e-6);
    assert!((base1[2] - 0.5).abs() < 1e-6);
}

#[test]
fn first_face_normal_of_four_segment_cone() {
    let mesh = unit_cone(4);
    let n = normal_at(&mesh.face_normals, 0);
    // Outward/upward: exact value (2/3, 1/3, 2/3) at the defaults.
    assert!(n[1] > 0.0);
    assert!((n[0] - 2.0 / 3.0).abs() < 1e-5);
    assert!((n[1] - 1.0 / 3.0).abs() < 1e-5);
    assert!((n[2] - 2.0 / 3.0).abs() < 1e-5);
}

#[test]
fn apex_sits_at_half_height() {
    let mesh = cone(&ConeParams {
        segments: 8,
        half_height: 1.25,
        ..Default::default()
    })
    .unwrap();
    for t in 0..mesh.triangle_count() {
        assert_eq!(mesh.position(t * 3), [0.0, 1.25, 0.0]);
    }
}

#[test]
fn ring_vertices_lie_on_base_circle() {
    let mesh = cone(&ConeParams {
        segments: 12,
        radius: 2.0,
        ..Default::default()
    })
    .unwrap();
    for t in 0..mesh.triangle_count() {
        for v in [t * 3 + 1, t * 3 + 2] {
            let p = mesh.position(v);
            let dist = (p[0] * p[0] + p[2] * p[2]).sqrt();
            assert!((dist - 2.0).abs() < 1e-4, "vertex {} at radius {}", v, dist);
            assert!((p[1] + 0.5).abs() < 1e-6);
        }
    }
}

// ─── Normals ──────────────────────────────────────────────────

#[test]
fn all_normals_are_unit_length() {
    let mesh = unit_cone(17);
    for set in [&mesh.face_normals, &mesh.vertex_normals] {
        for (i, chunk) in set.chunks_exact(3).enumerate() {
            let len = (chunk[0] * chunk[0] + chunk[1] * chunk[1] + chunk[2] * chunk[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-5, "normal {} has length {}", i, len);
        }
    }
}

#[test]
fn face_normals_constant_within_triangle() {
    let mesh = unit_cone(9);
    for t in 0..mesh.triangle_count() {
        let a = normal_at(&mesh.face_normals, t * 3);
        let b = normal_at(&mesh.face_normals, t * 3 + 1);
        let c = normal_at(&mesh.face_normals, t * 3 + 2);
        assert_eq!(a, b);
        assert_eq!(b, c);
    }
}

#[test]
fn face_normals_point_outward() {
    let mesh = unit_cone(24);
    // Dot of the face normal with the outward midpoint direction is positive.
    for t in 0..mesh.triangle_count() {
        let n = normal_at(&mesh.face_normals, t * 3);
        let b0 = mesh.position(t * 3 + 1);
        let b1 = mesh.position(t * 3 + 2);
        let mid = [(b0[0] + b1[0]) * 0.5, (b0[2] + b1[2]) * 0.5];
        assert!(n[0] * mid[0] + n[2] * mid[1] > 0.0, "triangle {}", t);
        assert!(n[1] > 0.0, "triangle {}", t);
    }
}

#[test]
fn apex_vertex_normal_is_straight_up() {
    let mesh = unit_cone(11);
    for t in 0..mesh.triangle_count() {
        assert_eq!(normal_at(&mesh.vertex_normals, t * 3), [0.0, 1.0, 0.0]);
    }
}

#[test]
fn shared_ring_edge_shares_smoothed_normal() {
    let mesh = unit_cone(13);
    let s = mesh.triangle_count();
    for t in 0..s {
        let right = normal_at(&mesh.vertex_normals, t * 3 + 2);
        let next_left = normal_at(&mesh.vertex_normals, ((t + 1) % s) * 3 + 1);
        assert_eq!(right, next_left, "edge between triangles {} and {}", t, (t + 1) % s);
    }
}

#[test]
fn taller_cone_has_flatter_side_normals() {
    // More height tilts side normals toward horizontal (smaller y).
    let squat = cone(&ConeParams {
        segments: 8,
        half_height: 0.1,
        ..Default::default()
    })
    .unwrap();
    let tall = cone(&ConeParams {
        segments: 8,
        half_height: 5.0,
        ..Default::default()
    })
    .unwrap();
    let ny_squat = squat.face_normals[1];
    let ny_tall = tall.face_normals[1];
    assert!(ny_squat > ny_tall);
    assert!(ny_tall > 0.0);
}

// ─── Normal-Set Selection ─────────────────────────────────────

#[test]
fn starts_on_face_set_and_clean() {
    let mesh = unit_cone(8);
    assert_eq!(mesh.active_set(), NormalSet::Face);
    assert_eq!(mesh.active_normals(), mesh.face_normals.as_slice());
    assert!(!mesh.normals_dirty());
}

#[test]
fn selecting_vertex_set_swaps_active_buffer() {
    let mut mesh = unit_cone(8);
    mesh.select_normal_set(NormalSet::Vertex);
    assert_eq!(mesh.active_set(), NormalSet::Vertex);
    assert_eq!(mesh.active_normals(), mesh.vertex_normals.as_slice());
    assert!(mesh.normals_dirty());
}

#[test]
fn selection_round_trip_is_bitwise_exact() {
    let mut mesh = unit_cone(32);
    let original = mesh.face_normals.clone();
    mesh.select_normal_set(NormalSet::Face);
    mesh.select_normal_set(NormalSet::Vertex);
    mesh.select_normal_set(NormalSet::Face);
    assert_eq!(mesh.active_normals(), original.as_slice());
}

#[test]
fn selection_does_not_touch_geometry() {
    let mut mesh = unit_cone(8);
    let positions = mesh.positions.clone();
    let indices = mesh.indices.clone();
    mesh.select_normal_set(NormalSet::Vertex);
    assert_eq!(mesh.positions, positions);
    assert_eq!(mesh.indices, indices);
}

#[test]
fn clean_flag_resets_after_upload_ack() {
    let mut mesh = unit_cone(8);
    mesh.select_normal_set(NormalSet::Vertex);
    mesh.mark_normals_clean();
    assert!(!mesh.normals_dirty());
    // The selection itself survives the flag reset.
    assert_eq!(mesh.active_set(), NormalSet::Vertex);
}

// ─── Validation & Serialization ───────────────────────────────

#[test]
fn validate_catches_corrupted_index() {
    let mut mesh = unit_cone(4);
    mesh.indices[5] = 200;
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_degenerate_triangle() {
    let mut mesh = unit_cone(4);
    mesh.indices[1] = mesh.indices[0];
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_denormalized_normal() {
    let mut mesh = unit_cone(4);
    mesh.face_normals[0] *= 3.0;
    mesh.face_normals[1] *= 3.0;
    mesh.face_normals[2] *= 3.0;
    assert!(mesh.validate().is_err());
}

#[test]
fn mesh_serializes_round_trip() {
    let mut mesh = unit_cone(6);
    mesh.select_normal_set(NormalSet::Vertex);
    let json = serde_json::to_string(&mesh).unwrap();
    let restored: ConeMesh = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.positions, mesh.positions);
    assert_eq!(restored.active_normals(), mesh.active_normals());
    assert_eq!(restored.active_set(), NormalSet::Vertex);
    // The dirty flag is transient and not serialized.
    assert!(!restored.normals_dirty());
}
