//! Uniform edge-length refinement (C3): repeatedly subdivide triangles
//! until every edge is within the length cap, keeping paths consistent
//! (spec.md §4.3).

use std::collections::{BTreeSet, HashMap};

use crate::config::Parameters;
use crate::geodesic::Path;
use crate::types::{Model, Triangle, UndirectedEdge, Vec3};

/// Minimum allowed smallest-to-largest edge-length ratio for the disabled
/// ratio-marking pass. Only consulted when
/// [`Parameters::ratio_marking_enabled`] is set.
const MIN_EDGE_RATIO_SQUARED: f32 = 0.3 * 0.3;

/// Refine `model` so every triangle edge is at most `max_edge_length`,
/// splicing new midpoint vertices into `paths` in lockstep (spec.md §4.3).
///
/// Runs until a round marks no edges; each round strictly reduces the
/// number of over-length edges, so the loop terminates.
pub fn refine(model: &Model, paths: &mut [Path], params: &Parameters) -> Model {
    let mut verts = model.vertices.clone();
    let mut tris = model.triangles.clone();
    let max_edge_length_squared = params.max_edge_length_squared();

    loop {
        let mut marked = mark_over_length_edges(&tris, &verts, max_edge_length_squared);

        if marked.is_empty() && params.ratio_marking_enabled() {
            mark_by_ratio(&tris, &verts, &mut marked);
        }

        if marked.is_empty() {
            break;
        }

        log::info!(
            "refinement round: {} vertices, {} triangles, {} edges marked",
            verts.len(),
            tris.len(),
            marked.len()
        );

        let midpoints = insert_midpoints(&marked, &mut verts);
        splice_paths(paths, &midpoints);
        tris = subdivide_triangles(&tris, &verts, &midpoints);
    }

    for tri in &tris {
        let [a, b, c] = tri.0;
        debug_assert!(a != b && b != c && c != a, "degenerate triangle survived refinement");
        debug_assert!(
            verts[a as usize] != verts[b as usize]
                && verts[b as usize] != verts[c as usize]
                && verts[c as usize] != verts[a as usize],
            "geometrically degenerate triangle survived refinement"
        );
    }

    Model {
        vertices: verts,
        triangles: tris,
    }
}

fn mark_over_length_edges(
    tris: &[Triangle],
    verts: &[Vec3],
    max_edge_length_squared: f32,
) -> BTreeSet<UndirectedEdge> {
    let mut marked = BTreeSet::new();
    for tri in tris {
        for edge in tri.edges() {
            let len2 = (verts[edge.1 as usize] - verts[edge.0 as usize]).norm_squared();
            if len2 > max_edge_length_squared {
                marked.insert(edge);
            }
        }
    }
    marked
}

/// The disabled minimum-to-maximum edge-length ratio pass (spec.md §9):
/// the source ships this commented out, annotated "seems broken", and the
/// port preserves that default (off). Exposed only behind
/// [`Parameters::with_ratio_marking`] for experimentation.
fn mark_by_ratio(tris: &[Triangle], verts: &[Vec3], marked: &mut BTreeSet<UndirectedEdge>) {
    loop {
        let old_size = marked.len();
        for tri in tris {
            let [a, b, c] = tri.0;
            let ab = UndirectedEdge::new(a, b);
            let bc = UndirectedEdge::new(b, c);
            let ca = UndirectedEdge::new(c, a);

            let mut len_ab2 = (verts[b as usize] - verts[a as usize]).norm_squared();
            let mut len_bc2 = (verts[c as usize] - verts[b as usize]).norm_squared();
            let mut len_ca2 = (verts[a as usize] - verts[c as usize]).norm_squared();
            if marked.contains(&ab) {
                len_ab2 /= 4.0;
            }
            if marked.contains(&bc) {
                len_bc2 /= 4.0;
            }
            if marked.contains(&ca) {
                len_ca2 /= 4.0;
            }

            if len_bc2.min(len_ca2) / len_ab2 < MIN_EDGE_RATIO_SQUARED {
                marked.insert(ab);
            }
            if len_ab2.min(len_ca2) / len_bc2 < MIN_EDGE_RATIO_SQUARED {
                marked.insert(bc);
            }
            if len_ab2.min(len_bc2) / len_ca2 < MIN_EDGE_RATIO_SQUARED {
                marked.insert(ca);
            }
        }
        if marked.len() == old_size {
            break;
        }
    }
}

/// Create one midpoint vertex per marked edge, in canonical-pair order
/// (spec.md §4.3: `BTreeSet<UndirectedEdge>` already iterates that way) so
/// new vertex indices are assigned deterministically regardless of hash
/// ordering.
fn insert_midpoints(
    marked: &BTreeSet<UndirectedEdge>,
    verts: &mut Vec<Vec3>,
) -> HashMap<UndirectedEdge, u32> {
    let mut midpoints = HashMap::with_capacity(marked.len());
    for &edge in marked {
        let mid = (verts[edge.0 as usize] + verts[edge.1 as usize]) * 0.5;
        midpoints.insert(edge, verts.len() as u32);
        verts.push(mid);
    }
    midpoints
}

fn splice_paths(paths: &mut [Path], midpoints: &HashMap<UndirectedEdge, u32>) {
    for path in paths.iter_mut() {
        if path.len() < 2 {
            continue;
        }
        let mut spliced = Vec::with_capacity(path.len() * 2);
        spliced.push(path[0]);
        for w in path.windows(2) {
            let (p, q) = (w[0], w[1]);
            if let Some(&mid) = midpoints.get(&UndirectedEdge::new(p, q)) {
                spliced.push(mid);
            }
            spliced.push(q);
        }
        *path = spliced;
    }
}

fn subdivide_triangles(
    tris: &[Triangle],
    verts: &[Vec3],
    midpoints: &HashMap<UndirectedEdge, u32>,
) -> Vec<Triangle> {
    let lookup = |a: u32, b: u32| midpoints.get(&UndirectedEdge::new(a, b)).copied();
    let mut new_tris = Vec::with_capacity(tris.len() * 2);
    for tri in tris {
        new_tris.extend(subdivide_triangle(*tri, verts, &lookup));
    }
    new_tris
}

/// Split the quad `(a, b, c, d)` along its shorter diagonal: `a-c` vs
/// `b-d`.
fn split_quad(a: u32, b: u32, c: u32, d: u32, verts: &[Vec3]) -> [Triangle; 2] {
    let ac = (verts[c as usize] - verts[a as usize]).norm_squared();
    let bd = (verts[d as usize] - verts[b as usize]).norm_squared();
    if ac < bd {
        [Triangle::new(a, b, c), Triangle::new(c, d, a)]
    } else {
        [Triangle::new(a, b, d), Triangle::new(b, c, d)]
    }
}

/// Subdivide one triangle according to which of its edges are marked,
/// per the 1->{2,3,4} rule of spec.md §4.3. The two-mark case is accepted
/// as-is and does not recurse to force a four-way split.
fn subdivide_triangle(
    tri: Triangle,
    verts: &[Vec3],
    lookup: &impl Fn(u32, u32) -> Option<u32>,
) -> Vec<Triangle> {
    let (a, b, c) = (tri.a(), tri.b(), tri.c());
    let ab = lookup(a, b);
    let bc = lookup(b, c);
    let ca = lookup(c, a);

    match (ab, bc, ca) {
        (Some(ab), Some(bc), Some(ca)) => vec![
            Triangle::new(a, ab, ca),
            Triangle::new(b, bc, ab),
            Triangle::new(c, ca, bc),
            Triangle::new(ab, bc, ca),
        ],
        (Some(ab), Some(bc), None) => {
            let mut out = split_quad(a, ab, bc, c, verts).to_vec();
            out.push(Triangle::new(ab, b, bc));
            out
        }
        (Some(ab), None, Some(ca)) => {
            let mut out = vec![Triangle::new(a, ab, ca)];
            out.extend(split_quad(ab, b, c, ca, verts));
            out
        }
        (None, Some(bc), Some(ca)) => {
            let mut out = split_quad(a, b, bc, ca, verts).to_vec();
            out.push(Triangle::new(bc, c, ca));
            out
        }
        (Some(ab), None, None) => vec![Triangle::new(a, ab, c), Triangle::new(b, c, ab)],
        (None, Some(bc), None) => vec![Triangle::new(a, b, bc), Triangle::new(bc, c, a)],
        (None, None, Some(ca)) => vec![Triangle::new(a, b, ca), Triangle::new(b, c, ca)],
        (None, None, None) => vec![Triangle::new(a, b, c)],
    }
}

#[cfg(test)]
#[path = "tests_unit/refine.rs"]
mod tests;
