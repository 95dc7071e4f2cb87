//! Shortcut-edge adjacency augmentation via unfolded triangle fans (C4,
//! spec.md §4.4).
//!
//! Two mesh vertices several triangles apart can still be visible to each
//! other across a geodesically straight line once their shared
//! neighborhood is flattened into a plane. Recording these as extra
//! "shortcut" adjacency entries lets the level-set pass (C5) find shorter,
//! straighter distance fields than the raw mesh graph alone would allow.

use std::collections::HashMap;

use nalgebra::Vector2;

use crate::types::{OrientedEdge, Triangle, UndirectedEdge, Vec3};

type Vec2 = Vector2<f32>;

/// How many triangles deep to unfold a fan before giving up. Higher values
/// find more shortcuts at the cost of more unfolding work per triangle
/// (spec.md §4.4 / source comment: "makes slightly nicer geodesics at the
/// expense of increased compute time").
const UNFOLD_DEPTH: u32 = 3;

/// Recompute adjacency by unfolding each triangle's local neighborhood into
/// the plane and recording straight-line distances between vertices that
/// become mutually visible, in addition to the direct mesh edges already in
/// `adjacency`.
///
/// Returns a fresh adjacency list; every entry is the minimum of the
/// direct mesh-edge distance (if any) and any shortcut distance found by
/// unfolding, so no original edge ever becomes unreachable or longer.
pub fn augment(
    vertices: &[Vec3],
    triangles: &[Triangle],
    opposite: &HashMap<OrientedEdge, u32>,
    adjacency: &[Vec<(u32, f32)>],
) -> Vec<Vec<(u32, f32)>> {
    let mut min_distance: HashMap<UndirectedEdge, f32> = HashMap::new();

    for tri in triangles {
        let [x, y, z] = tri.0;
        let (px, py, pz) = (
            vertices[x as usize],
            vertices[y as usize],
            vertices[z as usize],
        );

        let flat_x = Vec2::new(0.0, 0.0);
        let flat_y = Vec2::new((py - px).norm(), 0.0);
        let flat_z = flatten_third_point(px, py, pz);

        unfold_edge(
            UNFOLD_DEPTH, x, flat_x, y, flat_y, z, flat_z, flat_y, flat_z, vertices, opposite,
            &mut min_distance,
        );
        unfold_edge(
            UNFOLD_DEPTH, y, flat_y, z, flat_z, x, flat_x, flat_z, flat_x, vertices, opposite,
            &mut min_distance,
        );
        unfold_edge(
            UNFOLD_DEPTH, z, flat_z, x, flat_x, y, flat_y, flat_x, flat_y, vertices, opposite,
            &mut min_distance,
        );
    }

    for (v, neighbors) in adjacency.iter().enumerate() {
        for &(n, len) in neighbors {
            record_min(&mut min_distance, v as u32, n, len);
        }
    }

    let mut new_adjacency = vec![Vec::new(); vertices.len()];
    for (UndirectedEdge(a, b), len) in min_distance {
        new_adjacency[a as usize].push((b, len));
        new_adjacency[b as usize].push((a, len));
    }
    for list in new_adjacency.iter_mut() {
        list.sort_by(|l, r| l.0.cmp(&r.0).then(l.1.partial_cmp(&r.1).unwrap()));
    }
    new_adjacency
}

fn record_min(min_distance: &mut HashMap<UndirectedEdge, f32>, a: u32, b: u32, d: f32) {
    let entry = min_distance
        .entry(UndirectedEdge::new(a, b))
        .or_insert(f32::INFINITY);
    if d < *entry {
        *entry = d;
    }
}

/// Place the third vertex `z` of a triangle in the 2D frame where `x` is
/// the origin and `y` lies on the positive x-axis.
fn flatten_third_point(x: Vec3, y: Vec3, z: Vec3) -> Vec2 {
    let xy = (y - x).normalize();
    let perp_xy = (y - x).cross(&(z - x)).cross(&(y - x)).normalize();
    let along = (z - x).dot(&xy);
    let perp = (z - x).dot(&perp_xy);
    Vec2::new(along, perp)
}

fn is_ccw(a: Vec2, b: Vec2, c: Vec2) -> bool {
    let perp = Vec2::new(-(b.y - a.y), b.x - a.x);
    perp.dot(&(c - a)) > 0.0
}

/// Unfold the triangle across oriented edge `ai -> bi` as seen from `root`
/// (spec.md §4.4), recording a shortcut between `root` and the unfolded
/// third vertex when it stays within the `[limit_a, limit_b]` visibility
/// wedge, then recursing into the two sub-wedges it creates.
#[allow(clippy::too_many_arguments)]
fn unfold_edge(
    depth: u32,
    root: u32,
    flat_root: Vec2,
    ai: u32,
    flat_a: Vec2,
    bi: u32,
    flat_b: Vec2,
    limit_a: Vec2,
    limit_b: Vec2,
    vertices: &[Vec3],
    opposite: &HashMap<OrientedEdge, u32>,
    min_distance: &mut HashMap<UndirectedEdge, f32>,
) {
    let ci = match opposite.get(&OrientedEdge::new(bi, ai)) {
        Some(&c) => c,
        None => return,
    };

    let (a, b, c) = (
        vertices[ai as usize],
        vertices[bi as usize],
        vertices[ci as usize],
    );
    let ab = (b - a).normalize();
    let along = (c - a).dot(&ab);
    let perp = -(c - a - ab * along).norm();

    let flat_ab = (flat_b - flat_a).normalize();
    let flat_perp_ab = Vec2::new(-flat_ab.y, flat_ab.x);
    let flat_c = flat_a + flat_ab * along + flat_perp_ab * perp;

    let ccw_rac = is_ccw(flat_root, limit_a, flat_c) && is_ccw(flat_root, flat_a, flat_c);
    let ccw_rcb = is_ccw(flat_root, flat_c, limit_b) && is_ccw(flat_root, flat_c, flat_b);

    if ccw_rac && ccw_rcb {
        record_min(min_distance, root, ci, (flat_root - flat_c).norm());
        if depth > 1 {
            unfold_edge(
                depth - 1, root, flat_root, ai, flat_a, ci, flat_c, limit_a, flat_c, vertices,
                opposite, min_distance,
            );
            unfold_edge(
                depth - 1, root, flat_root, ci, flat_c, bi, flat_b, flat_c, limit_b, vertices,
                opposite, min_distance,
            );
        }
    } else if ccw_rac && !ccw_rcb {
        if depth > 1 {
            unfold_edge(
                depth - 1, root, flat_root, ai, flat_a, ci, flat_c, limit_a, limit_b, vertices,
                opposite, min_distance,
            );
        }
    } else if !ccw_rac && ccw_rcb && depth > 1 {
        unfold_edge(
            depth - 1, root, flat_root, ci, flat_c, bi, flat_b, limit_a, limit_b, vertices,
            opposite, min_distance,
        );
    }
}

#[cfg(test)]
#[path = "../tests_unit/topology/unfold.rs"]
mod tests;
