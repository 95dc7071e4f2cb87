use super::*;
use crate::types::{Triangle, Vec3};

fn single_triangle_model() -> Model {
    Model {
        vertices: vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ],
        triangles: vec![Triangle::new(0, 1, 2)],
    }
}

/// A 2-row by `columns` strip of quads, each split into 2 triangles, laid
/// out on the XY plane with unit spacing (mirrors the index layout used by
/// the component-filter unit tests).
fn strip_model(columns: usize) -> Model {
    let idx = |r: usize, c: usize| (r * columns + c) as u32;
    let mut vertices = Vec::new();
    for r in 0..2 {
        for c in 0..columns {
            vertices.push(Vec3::new(c as f32, r as f32, 0.0));
        }
    }
    let mut triangles = Vec::new();
    for c in 0..columns - 1 {
        triangles.push(Triangle::new(idx(0, c), idx(0, c + 1), idx(1, c + 1)));
        triangles.push(Triangle::new(idx(0, c), idx(1, c + 1), idx(1, c)));
    }
    Model { vertices, triangles }
}

#[test]
fn no_constraints_returns_the_input_model_unchanged() {
    let model = single_triangle_model();
    let params = Parameters::new(10.0).unwrap();
    let (out, values, debug) = embed_constraints(&model, &[], &params).unwrap();

    assert_eq!(out, model);
    assert_eq!(values.len(), 3);
    assert!(values.iter().all(|v| v.is_nan()));
    assert!(debug.snapped_paths.is_empty());
}

#[test]
fn empty_chain_constraint_is_skipped_without_inscribing_anything() {
    let model = single_triangle_model();
    let params = Parameters::new(10.0).unwrap();
    let constraints = vec![Constraint {
        chain: Vec::new(),
        value: 1.0,
        radius: 0.0,
    }];

    let (out, values, _) = embed_constraints(&model, &constraints, &params).unwrap();
    assert_eq!(values.len(), out.vertices.len());
}

#[test]
fn two_distinct_valued_seams_keep_the_band_between_them() {
    let model = strip_model(5);
    let params = Parameters::new(10.0).unwrap();
    let constraints = vec![
        Constraint {
            chain: vec![0, 5],
            value: 1.0,
            radius: 0.0,
        },
        Constraint {
            chain: vec![4, 9],
            value: 2.0,
            radius: 0.0,
        },
    ];

    let (out, values, debug) = embed_constraints(&model, &constraints, &params).unwrap();

    assert_eq!(debug.snapped_paths.len(), 2);
    assert_eq!(out.triangles.len(), 8);
    assert_eq!(out.vertices.len(), 10);
    assert_eq!(values.len(), out.vertices.len());

    let value_at = |pos: Vec3| {
        let i = out
            .vertices
            .iter()
            .position(|&v| (v - pos).norm() < 1e-6)
            .expect("vertex survives output compaction");
        values[i]
    };
    assert_eq!(value_at(Vec3::new(0.0, 0.0, 0.0)), 1.0);
    assert_eq!(value_at(Vec3::new(0.0, 1.0, 0.0)), 1.0);
    assert_eq!(value_at(Vec3::new(4.0, 0.0, 0.0)), 2.0);
    assert_eq!(value_at(Vec3::new(4.0, 1.0, 0.0)), 2.0);
}

#[test]
fn negative_radius_is_rejected() {
    let model = single_triangle_model();
    let params = Parameters::new(10.0).unwrap();
    let constraints = vec![Constraint {
        chain: vec![0, 1],
        value: 1.0,
        radius: -0.1,
    }];

    let err = embed_constraints(&model, &constraints, &params).unwrap_err();
    assert_eq!(err, crate::error::MeshError::NegativeRadius { radius: -0.1 });
}

#[test]
fn zero_radius_constraint_records_no_contour_loop() {
    let model = single_triangle_model();
    let params = Parameters::new(10.0).unwrap();
    let constraints = vec![Constraint {
        chain: vec![0, 1],
        value: 1.0,
        radius: 0.0,
    }];

    let (_, _, debug) = embed_constraints(&model, &constraints, &params).unwrap();
    assert_eq!(debug.contour_loops.len(), 1);
    assert!(debug.contour_loops[0].is_empty());
}

#[test]
fn a_single_unbounded_seam_leaves_nothing_kept() {
    let model = strip_model(5);
    let params = Parameters::new(10.0).unwrap();
    let constraints = vec![Constraint {
        chain: vec![0, 5],
        value: 1.0,
        radius: 0.0,
    }];

    let (out, _, _) = embed_constraints(&model, &constraints, &params).unwrap();
    assert!(out.triangles.is_empty());
    assert!(out.vertices.is_empty());
}
