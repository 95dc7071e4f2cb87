use super::*;
use crate::types::Vec3;

fn single_triangle() -> (Vec<Vec3>, Vec<Triangle>) {
    (
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
        ],
        vec![Triangle::new(0, 1, 2)],
    )
}

#[test]
fn add_vertex_on_the_same_mesh_vertex_merges() {
    let (verts, tris) = single_triangle();
    let mut epm = EmbeddedPlanarMap::new(&verts, &tris, 1e-3);
    let id1 = epm.add_vertex(EmbeddedVertex::on_vertex(1));
    let id2 = epm.add_vertex(EmbeddedVertex::on_vertex(1));
    assert_eq!(id1, id2);
}

#[test]
fn add_vertex_near_coincident_points_merge_within_tolerance() {
    let (verts, tris) = single_triangle();
    let mut epm = EmbeddedPlanarMap::new(&verts, &tris, 1e-2);
    // the same point on edge (0,1), expressed from either direction.
    let id1 = epm.add_vertex(EmbeddedVertex::on_edge(0, 1, 0.5));
    let id2 = epm.add_vertex(EmbeddedVertex::on_edge(1, 0, 0.5));
    assert_eq!(id1, id2);
}

#[test]
fn split_triangles_leaves_an_untouched_triangle_alone() {
    let (verts, tris) = single_triangle();
    let mut epm = EmbeddedPlanarMap::new(&verts, &tris, 1e-3);
    let (out_verts, out_tris, epm_to_split) = epm.split_triangles(&tris);
    assert_eq!(out_tris.len(), 1);
    assert_eq!(out_verts.len(), 3);
    assert_eq!(epm_to_split, vec![0, 1, 2]);
}

#[test]
fn split_triangles_inscribes_a_chord_between_two_edges() {
    let (verts, tris) = single_triangle();
    let mut epm = EmbeddedPlanarMap::new(&verts, &tris, 1e-3);
    let p = epm.add_vertex(EmbeddedVertex::on_edge(0, 1, 0.5));
    let q = epm.add_vertex(EmbeddedVertex::on_edge(0, 2, 0.5));
    epm.add_edge(p, q, 5.0);

    let (out_verts, out_tris, _) = epm.split_triangles(&tris);

    assert_eq!(out_verts.len(), 5);
    assert_eq!(out_tris.len(), 3);
    for tri in &out_tris {
        let [a, b, c] = tri.0;
        assert!(a != b && b != c && c != a);
    }

    let inscribed: Vec<_> = epm.inscribed_edges().collect();
    assert_eq!(inscribed.len(), 1);
    assert_eq!(inscribed[0].2, 5.0);
}

#[test]
fn add_edge_between_adjacent_vertices_does_not_split_anything() {
    let (verts, tris) = single_triangle();
    let mut epm = EmbeddedPlanarMap::new(&verts, &tris, 1e-3);
    let id0 = epm.add_vertex(EmbeddedVertex::on_vertex(0));
    let id1 = epm.add_vertex(EmbeddedVertex::on_vertex(1));
    epm.add_edge(id0, id1, 2.0);

    let (_, out_tris, _) = epm.split_triangles(&tris);
    assert_eq!(out_tris.len(), 1);

    let inscribed: Vec<_> = epm.inscribed_edges().collect();
    assert_eq!(inscribed.len(), 1);
    assert_eq!(inscribed[0].2, 2.0);
}
