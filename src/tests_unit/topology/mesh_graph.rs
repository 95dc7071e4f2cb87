use super::*;
use crate::types::{Triangle, Vec3};

fn unit_square() -> (Vec<Vec3>, Vec<Triangle>) {
    let verts = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    let tris = vec![Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)];
    (verts, tris)
}

#[test]
fn adjacency_has_all_triangle_edges() {
    let (verts, tris) = unit_square();
    let graph = MeshGraph::build(&verts, &tris).unwrap();
    assert_eq!(graph.num_vertices(), 4);
    // vertex 0 touches 1, 2 (diagonal), 3
    assert_eq!(graph.adjacency(0).len(), 3);
    // vertex 1 touches 0 and 2
    assert_eq!(graph.adjacency(1).len(), 2);
}

#[test]
fn opposite_vertex_lookup() {
    let (verts, tris) = unit_square();
    let graph = MeshGraph::build(&verts, &tris).unwrap();
    assert_eq!(graph.opposite(OrientedEdge::new(0, 1)), Some(2));
    assert_eq!(graph.opposite(OrientedEdge::new(1, 0)), None);
    assert_eq!(graph.opposite(OrientedEdge::new(0, 2)), Some(3));
    assert_eq!(graph.opposite(OrientedEdge::new(2, 0)), Some(1));
}

#[test]
fn edge_length_is_euclidean_distance() {
    let (verts, tris) = unit_square();
    let graph = MeshGraph::build(&verts, &tris).unwrap();
    let (_, len) = graph.adjacency(0).iter().find(|(n, _)| *n == 1).unwrap();
    assert!((len - 1.0).abs() < 1e-6);
    let (_, diag) = graph.adjacency(0).iter().find(|(n, _)| *n == 2).unwrap();
    assert!((diag - 2.0f32.sqrt()).abs() < 1e-6);
}

#[test]
fn rejects_out_of_range_vertex() {
    let verts = vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)];
    let tris = vec![Triangle::new(0, 1, 5)];
    assert!(matches!(
        MeshGraph::build(&verts, &tris),
        Err(MeshError::VertexIndexOutOfRange { .. })
    ));
}

#[test]
fn rejects_repeated_vertex_index() {
    let verts = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    let tris = vec![Triangle::new(0, 0, 1)];
    assert!(matches!(
        MeshGraph::build(&verts, &tris),
        Err(MeshError::DegenerateTriangle { .. })
    ));
}

#[test]
fn rejects_non_manifold_oriented_edge() {
    let verts = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
    ];
    // Both triangles use the oriented edge (0,1) -- not manifold.
    let tris = vec![Triangle::new(0, 1, 2), Triangle::new(0, 1, 3)];
    assert!(matches!(
        MeshGraph::build(&verts, &tris),
        Err(MeshError::NonManifoldEdge { .. })
    ));
}

#[test]
fn adjacency_lists_are_sorted() {
    let (verts, tris) = unit_square();
    let graph = MeshGraph::build(&verts, &tris).unwrap();
    for v in 0..graph.num_vertices() as u32 {
        let list = graph.adjacency(v);
        assert!(list.windows(2).all(|w| w[0].0 <= w[1].0));
    }
}
