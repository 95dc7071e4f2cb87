//! Shared Dijkstra utility (spec.md §9 Design Notes).
//!
//! Both the geodesic snapper (C2) and the level-set distance field (C5) run
//! a min-heap Dijkstra over the mesh adjacency graph, one seeded from a
//! single goal vertex, the other from every path vertex at once with a
//! signed initial distance. This module factors the heap loop they share
//! instead of duplicating it.

use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Settled distances and predecessors from one Dijkstra run.
///
/// `predecessor[v] == None` means `v` was never settled, or `v` was one of
/// the initial sources.
pub struct ShortestPaths {
    pub distance: Vec<f32>,
    pub predecessor: Vec<Option<u32>>,
}

/// Run Dijkstra over a graph of `num_vertices` vertices, seeded from
/// `sources` (vertex, initial distance), with neighbors supplied by
/// `neighbors_of(v) -> [(neighbor, edge_weight), ...]`.
///
/// `stop(v, d)` is called each time a vertex `v` is popped off the heap at
/// its final settled distance `d`; returning `true` ends the search
/// immediately (used for the "until the current path end is settled" and
/// "once distances go positive" early-termination rules in spec.md §4.2 and
/// §4.5).
///
/// Ties in relaxation (`new_distance == old_distance`) are broken by
/// preferring the smaller predecessor vertex index, for run-to-run
/// determinism (spec.md §4.2, §5).
pub fn shortest_paths<F, N>(
    num_vertices: usize,
    sources: impl IntoIterator<Item = (u32, f32)>,
    neighbors_of: F,
    mut stop: impl FnMut(u32, f32) -> bool,
) -> ShortestPaths
where
    F: Fn(u32) -> N,
    N: IntoIterator<Item = (u32, f32)>,
{
    let mut distance = vec![f32::INFINITY; num_vertices];
    let mut predecessor: Vec<Option<u32>> = vec![None; num_vertices];
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f32>, u32)>> = BinaryHeap::new();

    for (v, d) in sources {
        if d < distance[v as usize] {
            distance[v as usize] = d;
            heap.push(Reverse((OrderedFloat(d), v)));
        }
    }

    while let Some(Reverse((OrderedFloat(d), v))) = heap.pop() {
        if d > distance[v as usize] {
            continue; // stale heap entry superseded by a better relaxation
        }
        if stop(v, d) {
            break;
        }
        for (n, w) in neighbors_of(v) {
            let nd = d + w;
            let n_idx = n as usize;
            let improves = nd < distance[n_idx];
            let ties_smaller = nd == distance[n_idx]
                && predecessor[n_idx].map_or(true, |p| v < p);
            if improves || ties_smaller {
                distance[n_idx] = nd;
                predecessor[n_idx] = Some(v);
                heap.push(Reverse((OrderedFloat(nd), n)));
            }
        }
    }

    ShortestPaths { distance, predecessor }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 - 1 - 2
    //  \_____/   (direct edge 0-2 of weight 3, vs 1+1=2 through vertex 1)
    fn graph() -> Vec<Vec<(u32, f32)>> {
        vec![
            vec![(1, 1.0), (2, 3.0)],
            vec![(0, 1.0), (2, 1.0)],
            vec![(1, 1.0), (0, 3.0)],
        ]
    }

    #[test]
    fn shortest_path_prefers_lower_total_weight() {
        let g = graph();
        let result = shortest_paths(3, [(0, 0.0)], |v| g[v as usize].clone(), |_, _| false);
        assert_eq!(result.distance[2], 2.0);
        assert_eq!(result.predecessor[2], Some(1));
        assert_eq!(result.predecessor[1], Some(0));
    }

    #[test]
    fn stop_callback_halts_expansion() {
        let g = graph();
        let mut visited = Vec::new();
        let result = shortest_paths(
            3,
            [(0, 0.0)],
            |v| g[v as usize].clone(),
            |v, _| {
                visited.push(v);
                v == 1
            },
        );
        assert_eq!(visited, vec![0, 1]);
        // vertex 2 was never settled because we stopped at 1, but it may
        // still have a tentative (non-final) relaxed distance recorded.
        assert!(result.distance[2] >= 2.0);
    }

    #[test]
    fn unreachable_vertex_keeps_infinite_distance_and_no_predecessor() {
        let g = vec![vec![], vec![]];
        let result = shortest_paths(2, [(0, 0.0)], |v| g[v as usize].clone(), |_, _| false);
        assert_eq!(result.distance[1], f32::INFINITY);
        assert_eq!(result.predecessor[1], None);
    }

    #[test]
    fn ties_prefer_smaller_predecessor_index() {
        // vertices 0 and 1 both reach vertex 2 at distance 1.0; vertex 0 < 1
        // must win the predecessor slot regardless of heap pop order.
        let g = vec![vec![(2, 1.0)], vec![(2, 1.0)], vec![]];
        let result = shortest_paths(
            3,
            [(1, 0.0), (0, 0.0)],
            |v| g[v as usize].clone(),
            |_, _| false,
        );
        assert_eq!(result.predecessor[2], Some(0));
    }
}
