//! Integration scenarios exercising the whole pipeline end to end.

use meshembed::prelude::*;

fn unit_cube() -> Model {
    let v = |x: f32, y: f32, z: f32| Vec3::new(x, y, z);
    let vertices = vec![
        v(0.0, 0.0, 0.0), // 0
        v(1.0, 0.0, 0.0), // 1
        v(1.0, 1.0, 0.0), // 2
        v(0.0, 1.0, 0.0), // 3
        v(0.0, 0.0, 1.0), // 4
        v(1.0, 0.0, 1.0), // 5
        v(1.0, 1.0, 1.0), // 6
        v(0.0, 1.0, 1.0), // 7
    ];
    let t = Triangle::new;
    let triangles = vec![
        t(0, 3, 2),
        t(0, 2, 1), // bottom
        t(4, 5, 6),
        t(4, 6, 7), // top
        t(0, 1, 5),
        t(0, 5, 4), // front
        t(3, 7, 6),
        t(3, 6, 2), // back
        t(0, 4, 7),
        t(0, 7, 3), // left
        t(1, 2, 6),
        t(1, 6, 5), // right
    ];
    Model { vertices, triangles }
}

/// Two vertex-disjoint tetrahedra, each a closed manifold on its own.
fn disjoint_tetrahedra() -> Model {
    let v = |x: f32, y: f32, z: f32| Vec3::new(x, y, z);
    let vertices = vec![
        v(0.0, 0.0, 0.0),
        v(1.0, 0.0, 0.0),
        v(0.0, 1.0, 0.0),
        v(0.0, 0.0, 1.0),
        v(10.0, 0.0, 0.0),
        v(11.0, 0.0, 0.0),
        v(10.0, 1.0, 0.0),
        v(10.0, 0.0, 1.0),
    ];
    let t = Triangle::new;
    let triangles = vec![
        t(0, 2, 1),
        t(0, 1, 3),
        t(0, 3, 2),
        t(1, 2, 3),
        t(4, 6, 5),
        t(4, 5, 7),
        t(4, 7, 6),
        t(5, 6, 7),
    ];
    Model { vertices, triangles }
}

fn flat_square() -> Model {
    let v = |x: f32, y: f32| Vec3::new(x, y, 0.0);
    Model {
        vertices: vec![v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)],
        triangles: vec![Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)],
    }
}

#[test]
fn unit_cube_with_no_constraints_round_trips_unchanged() {
    let cube = unit_cube();
    let params = Parameters::new(10.0).unwrap();
    let (out, values, _) = embed_constraints(&cube, &[], &params).unwrap();

    assert_eq!(out, cube);
    assert_eq!(values.len(), 8);
    assert!(values.iter().all(|v| v.is_nan()));
}

#[test]
fn refining_a_unit_cube_caps_every_edge_length() {
    let cube = unit_cube();
    let params = Parameters::new(0.4).unwrap();
    let mut paths: Vec<Vec<u32>> = Vec::new();
    let refined = meshembed::refine::refine(&cube, &mut paths, &params);

    let cap_sq = 0.4 * 0.4 + 1e-4;
    for tri in &refined.triangles {
        for edge in tri.edges() {
            let a = refined.vertices[edge.0 as usize];
            let b = refined.vertices[edge.1 as usize];
            assert!((a - b).norm_squared() <= cap_sq, "edge exceeds the length cap");
        }
    }
    assert!(refined.vertices.len() > cube.vertices.len());
}

#[test]
fn a_single_diagonal_constraint_on_a_flat_square_keeps_nothing() {
    let square = flat_square();
    let params = Parameters::new(10.0).unwrap();
    let constraints = vec![Constraint {
        chain: vec![0, 2],
        value: 1.0,
        radius: 0.0,
    }];

    let (out, _, _) = embed_constraints(&square, &constraints, &params).unwrap();
    assert!(out.triangles.is_empty());
    assert!(out.vertices.is_empty());
}

#[test]
fn two_differently_valued_parallel_constraints_keep_the_band_between_them() {
    let square = flat_square();
    let params = Parameters::new(10.0).unwrap();
    let constraints = vec![
        Constraint {
            chain: vec![0, 1],
            value: 0.0,
            radius: 0.0,
        },
        Constraint {
            chain: vec![2, 3],
            value: 1.0,
            radius: 0.0,
        },
    ];

    let (out, values, _) = embed_constraints(&square, &constraints, &params).unwrap();

    assert_eq!(out.triangles.len(), 2);
    assert_eq!(out.vertices.len(), 4);

    let value_at = |pos: Vec3| {
        let i = out.vertices.iter().position(|&v| (v - pos).norm() < 1e-6).unwrap();
        values[i]
    };
    assert_eq!(value_at(Vec3::new(0.0, 0.0, 0.0)), 0.0);
    assert_eq!(value_at(Vec3::new(1.0, 0.0, 0.0)), 0.0);
    assert_eq!(value_at(Vec3::new(1.0, 1.0, 0.0)), 1.0);
    assert_eq!(value_at(Vec3::new(0.0, 1.0, 0.0)), 1.0);
}

#[test]
fn a_negative_radius_constraint_is_a_fatal_input_error() {
    let square = flat_square();
    let params = Parameters::new(10.0).unwrap();
    let constraints = vec![Constraint {
        chain: vec![0, 1],
        value: 1.0,
        radius: -1.0,
    }];

    let err = embed_constraints(&square, &constraints, &params).unwrap_err();
    assert_eq!(err, meshembed::error::MeshError::NegativeRadius { radius: -1.0 });
}

#[test]
fn a_constraint_chain_spanning_disjoint_components_truncates_without_crashing() {
    let tetrahedra = disjoint_tetrahedra();
    let params = Parameters::new(10.0).unwrap();
    let constraints = vec![Constraint {
        chain: vec![0, 4],
        value: 1.0,
        radius: 0.0,
    }];

    let (out, values, debug) = embed_constraints(&tetrahedra, &constraints, &params).unwrap();

    assert_eq!(values.len(), out.vertices.len());
    assert_eq!(debug.snapped_paths.len(), 1);
    assert_eq!(debug.snapped_paths[0], vec![0]);
}
