//! Per-constraint distance field and iso-contour extraction (C5, spec.md
//! §4.5).
//!
//! A radius-zero constraint embeds its snapped path vertices directly. A
//! positive-radius constraint instead grows a signed distance field
//! outward from the path (negative on the path side, by `-radius`) and
//! reads back the zero level set as a chain of edge-crossing points.

use std::collections::{HashMap, VecDeque};

use crate::dijkstra;
use crate::topology::MeshGraph;
use crate::types::{EmbeddedVertex, OrientedEdge, Triangle};

/// Embed one constraint's path as a chain of [`EmbeddedVertex`]s.
///
/// `radius == 0.0` embeds the path vertices directly. A positive radius
/// instead traces the offset iso-contour and may return an empty chain if
/// the contour never crosses back to the non-negative side (the whole mesh
/// is within `radius` of the path).
pub fn embed_constraint(
    graph: &MeshGraph,
    triangles: &[Triangle],
    path: &[u32],
    value_radius: f32,
) -> Vec<EmbeddedVertex> {
    if value_radius == 0.0 {
        return path.iter().map(|&v| EmbeddedVertex::on_vertex(v)).collect();
    }

    let distances = signed_distance_field(graph, path, value_radius);
    extract_contour(triangles, &distances)
}

/// Grow a signed distance field from `seeds`, each starting at `-radius`
/// (so the field is negative within `radius` of the path and increases
/// outward), stopping expansion once the settled distance goes positive
/// (spec.md §4.5: no contour can appear further out than that).
fn signed_distance_field(graph: &MeshGraph, seeds: &[u32], radius: f32) -> Vec<f32> {
    let sources = seeds.iter().map(|&v| (v, -radius));
    let result = dijkstra::shortest_paths(
        graph.num_vertices(),
        sources,
        |v| graph.adjacency(v).iter().copied().collect::<Vec<_>>(),
        |_, d| d > 0.0,
    );
    result.distance
}

/// Record the zero-crossing point on directed edge `a -> b` (`a` must be
/// on the negative side, `b` on the non-negative side) and return its key.
fn add_crossing(
    distances: &[f32],
    a: u32,
    b: u32,
    embedded_pts: &mut HashMap<OrientedEdge, EmbeddedVertex>,
) -> OrientedEdge {
    debug_assert!(distances[a as usize] < 0.0 && distances[b as usize] >= 0.0);
    let mix = -distances[a as usize] / (distances[b as usize] - distances[a as usize]);
    let key = OrientedEdge::new(a, b);
    embedded_pts
        .entry(key)
        .or_insert_with(|| EmbeddedVertex::on_edge(a, b, mix));
    key
}

/// Read the zero level set of `distances` back out of `triangles` as a
/// single ordered chain of edge-crossing points (spec.md §4.5).
///
/// Each triangle straddling the zero level contributes one directed link
/// from its entry crossing to its exit crossing; the full contour is then
/// threaded together by following those links into one loop (or one open
/// chain, if the contour runs off the mesh boundary). Returns an empty
/// chain if no triangle straddles the level.
fn extract_contour(triangles: &[Triangle], distances: &[f32]) -> Vec<EmbeddedVertex> {
    let mut embedded_pts: HashMap<OrientedEdge, EmbeddedVertex> = HashMap::new();
    let mut links: HashMap<OrientedEdge, OrientedEdge> = HashMap::new();
    let mut back_links: HashMap<OrientedEdge, OrientedEdge> = HashMap::new();

    for tri in triangles {
        let mut v = tri.0;
        for _ in 0..3 {
            if distances[v[0] as usize] <= distances[v[1] as usize]
                && distances[v[0] as usize] <= distances[v[2] as usize]
            {
                break;
            }
            v = [v[1], v[2], v[0]];
        }
        let (a, b, c) = (v[0], v[1], v[2]);
        if distances[a as usize] >= 0.0 {
            continue;
        }

        let edge = if distances[b as usize] >= 0.0 && distances[c as usize] >= 0.0 {
            Some((
                add_crossing(distances, a, b, &mut embedded_pts),
                add_crossing(distances, a, c, &mut embedded_pts),
            ))
        } else if distances[b as usize] >= 0.0 {
            Some((
                add_crossing(distances, a, b, &mut embedded_pts),
                add_crossing(distances, c, b, &mut embedded_pts),
            ))
        } else if distances[c as usize] >= 0.0 {
            Some((
                add_crossing(distances, b, c, &mut embedded_pts),
                add_crossing(distances, a, c, &mut embedded_pts),
            ))
        } else {
            None
        };

        if let Some((from, to)) = edge {
            links.insert(from, to);
            back_links.insert(to, from);
        }
    }

    if links.is_empty() {
        return Vec::new();
    }

    // Deterministic start: the smallest link key, rather than whatever
    // order the map happens to iterate in (spec.md §5).
    let start = *links.keys().min().unwrap();
    let mut loop_: VecDeque<OrientedEdge> = VecDeque::new();
    loop_.push_back(start);
    loop {
        let back = *loop_.back().unwrap();
        match links.get(&back) {
            None => break,
            Some(&next) => {
                loop_.push_back(next);
                if next == loop_[0] {
                    break;
                }
            }
        }
    }
    if loop_[0] != *loop_.back().unwrap() {
        loop {
            let front = loop_[0];
            match back_links.get(&front) {
                None => break,
                Some(&prev) => {
                    if prev == *loop_.back().unwrap() {
                        break;
                    }
                    loop_.push_front(prev);
                }
            }
        }
    }

    loop_.into_iter().map(|e| embedded_pts[&e]).collect()
}

#[cfg(test)]
#[path = "tests_unit/levelset.rs"]
mod tests;
