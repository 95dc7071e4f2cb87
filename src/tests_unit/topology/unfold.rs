use super::*;
use crate::types::{Triangle, Vec3};

fn grid_mesh_raw() -> (Vec<Vec3>, Vec<Triangle>) {
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
    (verts, tris)
}

#[test]
fn direct_edges_are_preserved_as_an_upper_bound() {
    use crate::topology::MeshGraph;
    let (verts, tris) = grid_mesh_raw();
    let graph = MeshGraph::build(&verts, &tris).unwrap();
    let original: Vec<Vec<(u32, f32)>> = (0..graph.num_vertices() as u32)
        .map(|v| graph.adjacency(v).to_vec())
        .collect();

    let mut augmented_graph = graph.clone();
    augmented_graph.augment_with_unfolding(&verts, &tris);

    for (v, neighbors) in original.iter().enumerate() {
        for &(n, len) in neighbors {
            let found = augmented_graph
                .adjacency(v as u32)
                .iter()
                .find(|(an, _)| *an == n)
                .unwrap_or_else(|| panic!("edge {v}-{n} lost after unfolding"));
            assert!(found.1 <= len + 1e-4);
        }
    }
}

#[test]
fn augmented_adjacency_is_sorted_and_symmetric() {
    use crate::topology::MeshGraph;
    let (verts, tris) = grid_mesh_raw();
    let mut graph = MeshGraph::build(&verts, &tris).unwrap();
    graph.augment_with_unfolding(&verts, &tris);

    for v in 0..graph.num_vertices() as u32 {
        let list = graph.adjacency(v);
        assert!(list.windows(2).all(|w| w[0].0 <= w[1].0));
        for &(n, len) in list {
            let back = graph
                .adjacency(n)
                .iter()
                .find(|(bn, _)| *bn == v)
                .unwrap_or_else(|| panic!("adjacency {v}-{n} is not symmetric"));
            assert!((back.1 - len).abs() < 1e-4);
        }
    }
}

#[test]
fn augmentation_never_drops_edges() {
    use crate::topology::MeshGraph;
    let (verts, tris) = grid_mesh_raw();
    let graph = MeshGraph::build(&verts, &tris).unwrap();
    let before: usize = (0..graph.num_vertices() as u32)
        .map(|v| graph.adjacency(v).len())
        .sum();

    let mut augmented_graph = graph.clone();
    augmented_graph.augment_with_unfolding(&verts, &tris);
    let after: usize = (0..augmented_graph.num_vertices() as u32)
        .map(|v| augmented_graph.adjacency(v).len())
        .sum();

    assert!(after >= before);
}
