//! Geodesic path resolution (C2): snap each constraint's coarse vertex-pick
//! chain to a shortest path between consecutive picks (spec.md §4.2).

use crate::dijkstra;
use crate::error::{MeshError, Result};
use crate::topology::MeshGraph;

/// One constraint's snapped path: an ordered sequence of mesh-vertex
/// indices, all pairwise-adjacent in the mesh graph (possibly empty).
pub type Path = Vec<u32>;

/// Snap every constraint chain to a geodesic path on `graph`.
///
/// Returns one path per input chain, in order. A chain of length zero
/// yields an empty path (spec.md §3).
pub fn snap_chains(graph: &MeshGraph, chains: &[Vec<u32>]) -> Result<Vec<Path>> {
    chains.iter().map(|chain| snap_chain(graph, chain)).collect()
}

fn snap_chain(graph: &MeshGraph, chain: &[u32]) -> Result<Path> {
    if chain.is_empty() {
        return Ok(Vec::new());
    }
    for &v in chain {
        if v as usize >= graph.num_vertices() {
            return Err(MeshError::ConstraintVertexOutOfRange {
                index: v,
                num_vertices: graph.num_vertices(),
            });
        }
    }

    let mut path = vec![chain[0]];
    for &goal in &chain[1..] {
        extend_path_to_goal(graph, &mut path, goal);
    }
    Ok(path)
}

/// Run Dijkstra from `goal` until the current path end is settled, then
/// repeatedly append the predecessor of the path's last vertex until it
/// reaches `goal` (spec.md §4.2). If a predecessor is ever undefined before
/// `goal` is reached, the chain moves between connected components: log the
/// diagnostic and leave the path truncated at the last reachable vertex.
fn extend_path_to_goal(graph: &MeshGraph, path: &mut Vec<u32>, goal: u32) {
    let end = *path.last().expect("path always holds the chain's first vertex");
    if end == goal {
        return;
    }

    let result = dijkstra::shortest_paths(
        graph.num_vertices(),
        std::iter::once((goal, 0.0)),
        |v| graph.adjacency(v).iter().copied().collect::<Vec<_>>(),
        |v, _| v == end,
    );

    loop {
        let last = *path.last().unwrap();
        if last == goal {
            break;
        }
        match result.predecessor[last as usize] {
            Some(p) => path.push(p),
            None => {
                log::warn!("constraint chain moves between connected components");
                break;
            }
        }
    }
}

#[cfg(test)]
#[path = "tests_unit/geodesic.rs"]
mod tests;
