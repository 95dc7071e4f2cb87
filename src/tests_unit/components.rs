use super::*;

/// A 2-row by `columns` strip of quads, each split into 2 triangles; the
/// left/right side of every quad is a real mesh edge, usable as a
/// constrained seam.
fn strip(columns: usize) -> Vec<Triangle> {
    let idx = |r: usize, c: usize| (r * columns + c) as u32;
    let mut tris = Vec::new();
    for c in 0..columns - 1 {
        tris.push(Triangle::new(idx(0, c), idx(0, c + 1), idx(1, c + 1)));
        tris.push(Triangle::new(idx(0, c), idx(1, c + 1), idx(1, c)));
    }
    tris
}

fn seam(columns: usize, c: usize) -> UndirectedEdge {
    UndirectedEdge::new(c as u32, (columns + c) as u32)
}

#[test]
fn component_with_no_constrained_boundary_is_dropped() {
    let tris = strip(5);
    let constrained = HashMap::new();
    let keep = filter_components(&tris, &constrained);
    assert!(keep.iter().all(|&k| !k));
}

#[test]
fn component_between_two_distinct_values_is_kept() {
    let tris = strip(5);
    let mut constrained = HashMap::new();
    constrained.insert(seam(5, 0), 1.0);
    constrained.insert(seam(5, 4), 2.0);
    let keep = filter_components(&tris, &constrained);
    assert!(keep.iter().all(|&k| k));
}

#[test]
fn component_bounded_by_a_single_repeated_value_is_dropped() {
    let tris = strip(5);
    let mut constrained = HashMap::new();
    constrained.insert(seam(5, 0), 1.0);
    constrained.insert(seam(5, 1), 1.0);
    constrained.insert(seam(5, 4), 2.0);
    let keep = filter_components(&tris, &constrained);

    // the first quad (columns 0-1) is bounded on both sides by value 1.0.
    assert!(!keep[0] && !keep[1]);
    // the remaining quads (columns 1-4) see both 1.0 and 2.0.
    assert!(keep[2..].iter().all(|&k| k));
}
