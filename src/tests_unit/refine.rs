use super::*;
use crate::config::Parameters;

fn single_triangle(edge_len: f32) -> Model {
    Model {
        vertices: vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(edge_len, 0.0, 0.0),
            Vec3::new(0.0, edge_len, 0.0),
        ],
        triangles: vec![Triangle::new(0, 1, 2)],
    }
}

#[test]
fn within_limit_mesh_is_unchanged() {
    let model = single_triangle(1.0);
    let params = Parameters::new(2.0).unwrap();
    let mut paths: Vec<Path> = Vec::new();
    let out = refine(&model, &mut paths, &params);
    assert_eq!(out.vertices.len(), 3);
    assert_eq!(out.triangles.len(), 1);
}

#[test]
fn over_limit_triangle_is_quartered() {
    let model = single_triangle(2.0);
    let params = Parameters::new(1.0).unwrap();
    let mut paths: Vec<Path> = Vec::new();
    let out = refine(&model, &mut paths, &params);
    // all three edges marked -> 1 -> 4 split, exactly once (each new edge is 1.0).
    assert_eq!(out.vertices.len(), 6);
    assert_eq!(out.triangles.len(), 4);
    for tri in &out.triangles {
        for edge in tri.edges() {
            let len2 = (out.vertices[edge.1 as usize] - out.vertices[edge.0 as usize]).norm_squared();
            assert!(len2 <= 1.0 + 1e-4);
        }
    }
}

#[test]
fn two_marked_edges_produce_three_triangles() {
    // a long right triangle: ab and ca over length, bc short.
    let model = Model {
        vertices: vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(4.0, 0.1, 0.0),
        ],
        triangles: vec![Triangle::new(0, 1, 2)],
    };
    let params = Parameters::new(1.0).unwrap();
    let mut paths: Vec<Path> = Vec::new();
    let out = refine(&model, &mut paths, &params);
    assert!(out.triangles.len() >= 3);
    for tri in &out.triangles {
        let [a, b, c] = tri.0;
        assert!(a != b && b != c && c != a);
    }
}

#[test]
fn path_vertices_are_spliced_at_midpoints() {
    let model = single_triangle(2.0);
    let params = Parameters::new(1.0).unwrap();
    let mut paths: Vec<Path> = vec![vec![0, 1]];
    let out = refine(&model, &mut paths, &params);
    assert_eq!(paths[0].len(), 3);
    assert_eq!(paths[0][0], 0);
    assert_eq!(paths[0][2], 1);
    let mid = paths[0][1];
    assert!(mid >= 3 && (mid as usize) < out.vertices.len());
}

#[test]
fn single_vertex_path_is_left_untouched() {
    let model = single_triangle(2.0);
    let params = Parameters::new(1.0).unwrap();
    let mut paths: Vec<Path> = vec![vec![0]];
    refine(&model, &mut paths, &params);
    assert_eq!(paths[0], vec![0]);
}

#[test]
fn ratio_marking_is_off_by_default() {
    // a sliver triangle with all edges within the length cap but a poor
    // aspect ratio: with ratio marking disabled, refinement leaves it alone.
    let model = Model {
        vertices: vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.5, 0.01, 0.0),
        ],
        triangles: vec![Triangle::new(0, 1, 2)],
    };
    let params = Parameters::new(10.0).unwrap();
    assert!(!params.ratio_marking_enabled());
    let mut paths: Vec<Path> = Vec::new();
    let out = refine(&model, &mut paths, &params);
    assert_eq!(out.triangles.len(), 1);
}

#[test]
fn refinement_is_idempotent_once_converged() {
    let model = single_triangle(2.0);
    let params = Parameters::new(1.0).unwrap();
    let mut paths: Vec<Path> = Vec::new();
    let once = refine(&model, &mut paths, &params);
    let mut paths2: Vec<Path> = Vec::new();
    let twice = refine(&once, &mut paths2, &params);
    assert_eq!(once.triangles.len(), twice.triangles.len());
    assert_eq!(once.vertices.len(), twice.vertices.len());
}
