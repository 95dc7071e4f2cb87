use super::*;

fn five_points() -> Vec<Vec3> {
    (0..5)
        .map(|i| Vec3::new(i as f32, 0.0, 0.0))
        .collect()
}

#[test]
fn assemble_drops_unkept_triangles_and_compacts_the_rest() {
    let verts = five_points();
    let tris = vec![
        Triangle::new(0, 1, 2),
        Triangle::new(1, 2, 3),
        Triangle::new(2, 3, 4),
    ];
    let keep = [true, false, true];
    let constrained = HashMap::new();

    let (model, values) = assemble(&verts, &tris, &keep, &constrained);

    assert_eq!(model.triangles.len(), 2);
    assert_eq!(model.vertices.len(), 5);
    assert_eq!(values.len(), 5);
}

#[test]
fn assemble_carries_constrained_edge_values_onto_their_vertices() {
    let verts = five_points();
    let tris = vec![Triangle::new(0, 1, 2), Triangle::new(2, 3, 4)];
    let keep = [true, true];
    let mut constrained = HashMap::new();
    constrained.insert(UndirectedEdge::new(0, 1), 10.0);

    let (_, values) = assemble(&verts, &tris, &keep, &constrained);

    assert_eq!(values[0], 10.0);
    assert_eq!(values[1], 10.0);
    assert!(values[2].is_nan());
    assert!(values[3].is_nan());
    assert!(values[4].is_nan());
}

#[test]
fn assemble_drops_vertices_only_used_by_discarded_triangles() {
    let verts = five_points();
    let tris = vec![Triangle::new(0, 1, 2), Triangle::new(2, 3, 4)];
    let keep = [true, false];
    let constrained = HashMap::new();

    let (model, values) = assemble(&verts, &tris, &keep, &constrained);

    assert_eq!(model.triangles.len(), 1);
    assert_eq!(model.vertices.len(), 3);
    assert_eq!(values.len(), 3);
}
