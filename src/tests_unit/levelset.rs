use super::*;
use crate::types::{Triangle, Vec3};

/// A 3x3 grid of quads, triangulated, vertex 4 at the center with a
/// complete fan of 6 triangles around it (no boundary edges touch it).
fn grid_mesh() -> (MeshGraph, Vec<Triangle>) {
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
    let graph = MeshGraph::build(&verts, &tris).unwrap();
    (graph, tris)
}

#[test]
fn zero_radius_embeds_path_vertices_directly() {
    let (graph, tris) = grid_mesh();
    let chain = embed_constraint(&graph, &tris, &[0, 1, 4], 0.0);
    assert_eq!(
        chain,
        vec![
            EmbeddedVertex::on_vertex(0),
            EmbeddedVertex::on_vertex(1),
            EmbeddedVertex::on_vertex(4),
        ]
    );
}

#[test]
fn small_radius_around_interior_vertex_closes_a_loop() {
    let (graph, tris) = grid_mesh();
    let chain = embed_constraint(&graph, &tris, &[4], 0.5);
    assert!(!chain.is_empty());
    // the offset contour around an interior vertex with a complete
    // triangle fan closes back on itself.
    assert_eq!(chain.first(), chain.last());
    for ev in &chain {
        assert!(matches!(ev, EmbeddedVertex::OnEdge { .. }));
    }
}

#[test]
fn radius_covering_the_whole_mesh_yields_no_contour() {
    let (graph, tris) = grid_mesh();
    let chain = embed_constraint(&graph, &tris, &[4], 100.0);
    assert!(chain.is_empty());
}
