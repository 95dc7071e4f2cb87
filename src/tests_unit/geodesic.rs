use super::*;
use crate::types::{Triangle, Vec3};

/// A 2x2 grid of quads, triangulated, vertex 0 at origin incrementing by
/// row then column: (r, c) -> r * 3 + c for a 3x3 vertex grid.
fn grid_mesh() -> MeshGraph {
    let mut verts = Vec::new();
    for r in 0..3 {
        for c in 0..3 {
            verts.push(Vec3::new(c as f32, r as f32, 0.0));
        }
    }
    let idx = |r: usize, c: usize| (r * 3 + c) as u32;
    let mut tris = Vec::new();
    for r in 0..2 {
        for c in 0..2 {
            tris.push(Triangle::new(idx(r, c), idx(r, c + 1), idx(r + 1, c + 1)));
            tris.push(Triangle::new(idx(r, c), idx(r + 1, c + 1), idx(r + 1, c)));
        }
    }
    MeshGraph::build(&verts, &tris).unwrap()
}

#[test]
fn empty_chain_yields_empty_path() {
    let graph = grid_mesh();
    let paths = snap_chains(&graph, &[vec![]]).unwrap();
    assert_eq!(paths, vec![Vec::<u32>::new()]);
}

#[test]
fn single_vertex_chain_yields_single_vertex_path() {
    let graph = grid_mesh();
    let paths = snap_chains(&graph, &[vec![4]]).unwrap();
    assert_eq!(paths, vec![vec![4]]);
}

#[test]
fn adjacent_goals_produce_direct_path() {
    let graph = grid_mesh();
    // vertex 0 and vertex 1 are directly adjacent on the grid.
    let paths = snap_chains(&graph, &[vec![0, 1]]).unwrap();
    assert_eq!(paths[0], vec![0, 1]);
}

#[test]
fn distant_goals_snap_through_shortest_path() {
    let graph = grid_mesh();
    // corner to corner: 0 (top-left) to 8 (bottom-right) across the grid.
    let paths = snap_chains(&graph, &[vec![0, 8]]).unwrap();
    let path = &paths[0];
    assert_eq!(*path.first().unwrap(), 0);
    assert_eq!(*path.last().unwrap(), 8);
    // consecutive path vertices must be mesh-adjacent.
    for w in path.windows(2) {
        assert!(graph.adjacency(w[0]).iter().any(|(n, _)| *n == w[1]));
    }
}

#[test]
fn out_of_range_chain_vertex_is_an_error() {
    let graph = grid_mesh();
    let err = snap_chains(&graph, &[vec![0, 99]]).unwrap_err();
    assert!(matches!(err, MeshError::ConstraintVertexOutOfRange { .. }));
}

#[test]
fn disconnected_components_truncate_with_diagnostic() {
    // two disjoint triangles: {0,1,2} and {3,4,5}, no adjacency between them.
    let verts = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(10.0, 0.0, 0.0),
        Vec3::new(11.0, 0.0, 0.0),
        Vec3::new(10.0, 1.0, 0.0),
    ];
    let tris = vec![Triangle::new(0, 1, 2), Triangle::new(3, 4, 5)];
    let graph = MeshGraph::build(&verts, &tris).unwrap();
    let paths = snap_chains(&graph, &[vec![0, 3]]).unwrap();
    // truncated: only the reachable half is in the path, no panic/crash.
    assert_eq!(paths[0], vec![0]);
}
