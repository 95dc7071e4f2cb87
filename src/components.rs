//! Connected-component filter (C7, spec.md §4.7): keep only components of
//! the split triangulation whose boundary touches at least two distinct
//! constraint values.

use std::collections::{HashMap, HashSet};

use ordered_float::OrderedFloat;

use crate::types::{OrientedEdge, Triangle, UndirectedEdge};

/// Flood-fill `triangles` across every edge that isn't in `constrained`,
/// returning, per triangle, whether its component should be kept.
///
/// A component is kept iff the set of distinct `constrained` values
/// encountered crossing its boundary has size >= 2 -- i.e. it lies between
/// two different isovalue contours rather than entirely to one side of a
/// single one.
pub fn filter_components(triangles: &[Triangle], constrained: &HashMap<UndirectedEdge, f32>) -> Vec<bool> {
    let mut over: HashMap<OrientedEdge, usize> = HashMap::with_capacity(triangles.len() * 3);
    for (ti, tri) in triangles.iter().enumerate() {
        for &(x, y) in &[(tri.a(), tri.b()), (tri.b(), tri.c()), (tri.c(), tri.a())] {
            let prior = over.insert(OrientedEdge::new(x, y), ti);
            debug_assert!(prior.is_none(), "split triangulation is not manifold");
        }
    }

    let mut component_of: Vec<Option<usize>> = vec![None; triangles.len()];
    let mut keep: Vec<bool> = Vec::new();

    for seed in 0..triangles.len() {
        if component_of[seed].is_some() {
            continue;
        }
        let component = keep.len();
        component_of[seed] = Some(component);
        let mut values: HashSet<OrderedFloat<f32>> = HashSet::new();
        let mut todo = vec![seed];
        while let Some(at) = todo.pop() {
            let tri = triangles[at];
            for &(a, b) in &[(tri.a(), tri.b()), (tri.b(), tri.c()), (tri.c(), tri.a())] {
                if let Some(&value) = constrained.get(&UndirectedEdge::new(a, b)) {
                    values.insert(OrderedFloat(value));
                    continue;
                }
                if let Some(&neighbor) = over.get(&OrientedEdge::new(b, a)) {
                    if component_of[neighbor].is_none() {
                        component_of[neighbor] = Some(component);
                        todo.push(neighbor);
                    }
                }
            }
        }
        keep.push(values.len() >= 2);
    }

    log::info!(
        "component filter: {} component(s), {} kept",
        keep.len(),
        keep.iter().filter(|&&k| k).count()
    );

    component_of
        .into_iter()
        .map(|c| keep[c.expect("flood-fill assigns every triangle to a component")])
        .collect()
}

#[cfg(test)]
#[path = "tests_unit/components.rs"]
mod tests;
