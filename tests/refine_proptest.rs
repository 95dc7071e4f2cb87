//! Property: refinement is idempotent. A second call over an
//! already-refined mesh with the same edge-length cap inserts no new
//! vertices (spec.md §8).

use meshembed::prelude::*;
use proptest::prelude::*;

/// A `rows` x `cols` grid of unit-spaced quads, each split into 2
/// triangles -- manifold and non-degenerate by construction, for any
/// `rows, cols >= 2`.
fn grid_mesh(rows: usize, cols: usize) -> Model {
    let idx = |r: usize, c: usize| (r * cols + c) as u32;
    let mut vertices = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            vertices.push(Vec3::new(c as f32, r as f32, 0.0));
        }
    }
    let mut triangles = Vec::new();
    for r in 0..rows - 1 {
        for c in 0..cols - 1 {
            triangles.push(Triangle::new(idx(r, c), idx(r, c + 1), idx(r + 1, c + 1)));
            triangles.push(Triangle::new(idx(r, c), idx(r + 1, c + 1), idx(r + 1, c)));
        }
    }
    Model { vertices, triangles }
}

proptest! {
    #[test]
    fn refinement_of_a_refined_mesh_adds_no_vertices(
        rows in 2usize..6,
        cols in 2usize..6,
        max_edge_length in 0.2f32..3.0,
    ) {
        let model = grid_mesh(rows, cols);
        let params = Parameters::new(max_edge_length).unwrap();

        let mut paths: Vec<Vec<u32>> = Vec::new();
        let once = meshembed::refine::refine(&model, &mut paths, &params);

        let mut paths_again: Vec<Vec<u32>> = Vec::new();
        let twice = meshembed::refine::refine(&once, &mut paths_again, &params);

        prop_assert_eq!(once.vertices.len(), twice.vertices.len());
        prop_assert_eq!(once.triangles.len(), twice.triangles.len());
    }
}
