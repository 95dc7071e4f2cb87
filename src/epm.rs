//! Embedded planar map (C6, spec.md §4.6): inscribes constraint chains as
//! actual triangle edges by splitting the triangles they cross.
//!
//! Every edge this pipeline ever inserts is confined to a single triangle
//! by construction: C5's per-triangle contour crossings are an enter/exit
//! pair on that one triangle's two edges, and C2/C3's radius-zero paths
//! connect mesh-adjacent vertices. So unlike a general-purpose planar map,
//! this implementation locates the one triangle (or mesh edge) an inserted
//! edge already lies on rather than walking a path across several.

use std::collections::HashMap;

use crate::types::{EmbeddedVertex, Triangle, UndirectedEdge, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum SimplexKey {
    Vertex(u32),
    Edge(UndirectedEdge),
    Triangle(u32, u32, u32),
    Fallback(u32, u32),
}

fn sorted_triangle(a: u32, b: u32, c: u32) -> [u32; 3] {
    let mut v = [a, b, c];
    v.sort_unstable();
    v
}

/// Merges and inscribes embedded vertices and edges, then re-triangulates
/// to respect them (spec.md §4.6).
pub struct EmbeddedPlanarMap {
    vertices: Vec<Vec3>,
    triangle_of_vertex: HashMap<u32, Vec<[u32; 3]>>,
    triangle_of_edge: HashMap<UndirectedEdge, Vec<[u32; 3]>>,
    tolerance: f32,
    embedded: Vec<EmbeddedVertex>,
    by_simplex: HashMap<SimplexKey, Vec<u32>>,
    simplex_edges: HashMap<SimplexKey, Vec<(u32, u32, f32)>>,
}

impl EmbeddedPlanarMap {
    /// Build a map over `triangles`, merging new vertices within
    /// `tolerance` of an existing one on the same simplex.
    pub fn new(vertices: &[Vec3], triangles: &[Triangle], tolerance: f32) -> Self {
        let mut triangle_of_vertex: HashMap<u32, Vec<[u32; 3]>> = HashMap::new();
        let mut triangle_of_edge: HashMap<UndirectedEdge, Vec<[u32; 3]>> = HashMap::new();
        for tri in triangles {
            let key = sorted_triangle(tri.a(), tri.b(), tri.c());
            for v in tri.0 {
                triangle_of_vertex.entry(v).or_default().push(key);
            }
            for edge in tri.edges() {
                triangle_of_edge.entry(edge).or_default().push(key);
            }
        }
        Self {
            vertices: vertices.to_vec(),
            triangle_of_vertex,
            triangle_of_edge,
            tolerance,
            embedded: Vec::new(),
            by_simplex: HashMap::new(),
            simplex_edges: HashMap::new(),
        }
    }

    /// Insert an embedded vertex, returning a stable id. A vertex within
    /// `tolerance` of one already on the same simplex is merged into it.
    pub fn add_vertex(&mut self, ev: EmbeddedVertex) -> u32 {
        let key = Self::simplex_key(&ev);
        let pos = ev.interpolate(&self.vertices);
        if let Some(candidates) = self.by_simplex.get(&key) {
            for &id in candidates {
                let existing_pos = self.embedded[id as usize].interpolate(&self.vertices);
                if (existing_pos - pos).norm() <= self.tolerance {
                    return id;
                }
            }
        }
        let id = self.embedded.len() as u32;
        self.embedded.push(ev);
        self.by_simplex.entry(key).or_default().push(id);
        id
    }

    /// Insert an edge between two previously-added vertices, carrying
    /// `value`. A second insert between the same pair with a different
    /// value is dropped (after logging), matching the "same value"
    /// combiner of spec.md §4.6.
    pub fn add_edge(&mut self, id_a: u32, id_b: u32, value: f32) {
        let key = self.resolve_bucket(id_a, id_b);
        let (lo, hi) = (id_a.min(id_b), id_a.max(id_b));
        let bucket = self.simplex_edges.entry(key).or_default();
        if let Some(existing) = bucket.iter().find(|&&(x, y, _)| x == lo && y == hi) {
            if (existing.2 - value).abs() > 1e-6 {
                log::warn!(
                    "embedded planar map: edge ({lo}, {hi}) already carries value {}, dropping conflicting value {value}",
                    existing.2
                );
            }
            return;
        }
        bucket.push((lo, hi, value));
    }

    /// All inscribed (vertex-pair, value) edges, across every simplex
    /// bucket, for [`crate::components`]'s flood-fill boundary. Ids are in
    /// EPM id space; [`Self::split_triangles`] maps those 1:1 onto the
    /// returned embedded-vertex array.
    pub fn inscribed_edges(&self) -> impl Iterator<Item = (u32, u32, f32)> + '_ {
        self.simplex_edges.values().flat_map(|edges| edges.iter().copied())
    }

    /// Re-triangulate `triangles` so every inscribed edge is an actual
    /// triangle edge (spec.md §4.6). Returns the embedded vertices (one
    /// per EPM id, so `epm_to_split[i] == i`), the split triangles in that
    /// id space, and that identity map (kept for contract parity with the
    /// source's three-return-value shape).
    pub fn split_triangles(&mut self, triangles: &[Triangle]) -> (Vec<EmbeddedVertex>, Vec<Triangle>, Vec<u32>) {
        let mut out_tris = Vec::new();

        for tri in triangles {
            let (a, b, c) = (tri.a(), tri.b(), tri.c());
            let id_a = self.add_vertex(EmbeddedVertex::on_vertex(a));
            let id_b = self.add_vertex(EmbeddedVertex::on_vertex(b));
            let id_c = self.add_vertex(EmbeddedVertex::on_vertex(c));

            let mut boundary = vec![id_a];
            boundary.extend(self.edge_points(a, b).into_iter().map(|(id, _)| id));
            boundary.push(id_b);
            boundary.extend(self.edge_points(b, c).into_iter().map(|(id, _)| id));
            boundary.push(id_c);
            boundary.extend(self.edge_points(c, a).into_iter().map(|(id, _)| id));

            let s = sorted_triangle(a, b, c);
            let key = SimplexKey::Triangle(s[0], s[1], s[2]);
            let chord = self.simplex_edges.get(&key).and_then(|edges| {
                if edges.len() > 1 {
                    log::warn!(
                        "triangle ({a}, {b}, {c}) has {} inscribed chords; only the first is honored",
                        edges.len()
                    );
                }
                edges.first().map(|&(v1, v2, _)| (v1, v2))
            });

            for [x, y, z] in triangulate_with_chord(&boundary, chord) {
                out_tris.push(Triangle::new(x, y, z));
            }
        }

        let epm_to_split: Vec<u32> = (0..self.embedded.len() as u32).collect();
        (self.embedded.clone(), out_tris, epm_to_split)
    }

    fn simplex_key(ev: &EmbeddedVertex) -> SimplexKey {
        match *ev {
            EmbeddedVertex::OnVertex(v) => SimplexKey::Vertex(v),
            EmbeddedVertex::OnEdge { a, b, .. } => SimplexKey::Edge(UndirectedEdge::new(a, b)),
            EmbeddedVertex::OnTriangle { a, b, c, .. } => {
                let s = sorted_triangle(a, b, c);
                SimplexKey::Triangle(s[0], s[1], s[2])
            }
        }
    }

    fn containing_triangles(&self, id: u32) -> Vec<[u32; 3]> {
        match self.embedded[id as usize] {
            EmbeddedVertex::OnVertex(v) => {
                self.triangle_of_vertex.get(&v).cloned().unwrap_or_default()
            }
            EmbeddedVertex::OnEdge { a, b, .. } => self
                .triangle_of_edge
                .get(&UndirectedEdge::new(a, b))
                .cloned()
                .unwrap_or_default(),
            EmbeddedVertex::OnTriangle { a, b, c, .. } => vec![sorted_triangle(a, b, c)],
        }
    }

    fn resolve_bucket(&self, id_a: u32, id_b: u32) -> SimplexKey {
        if let (EmbeddedVertex::OnVertex(va), EmbeddedVertex::OnVertex(vb)) =
            (self.embedded[id_a as usize], self.embedded[id_b as usize])
        {
            let edge = UndirectedEdge::new(va, vb);
            if self.triangle_of_edge.contains_key(&edge) {
                return SimplexKey::Edge(edge);
            }
        }
        let tris_a = self.containing_triangles(id_a);
        let tris_b = self.containing_triangles(id_b);
        for t in &tris_a {
            if tris_b.contains(t) {
                return SimplexKey::Triangle(t[0], t[1], t[2]);
            }
        }
        log::warn!("embedded planar map: no common triangle for an inserted edge, inscribing it directly");
        SimplexKey::Fallback(id_a.min(id_b), id_a.max(id_b))
    }

    fn edge_points(&self, from: u32, to: u32) -> Vec<(u32, f32)> {
        let key = SimplexKey::Edge(UndirectedEdge::new(from, to));
        let mut pts: Vec<(u32, f32)> = self
            .by_simplex
            .get(&key)
            .into_iter()
            .flatten()
            .map(|&id| (id, edge_param(&self.embedded[id as usize], from, to)))
            .collect();
        pts.sort_by(|x, y| x.1.partial_cmp(&y.1).unwrap());
        pts
    }
}

fn edge_param(ev: &EmbeddedVertex, from: u32, to: u32) -> f32 {
    match *ev {
        EmbeddedVertex::OnEdge { a, b, t } if a == from && b == to => t,
        EmbeddedVertex::OnEdge { a, b, t } if a == to && b == from => 1.0 - t,
        _ => unreachable!("embedded vertex bucketed under edge ({from}, {to}) must be on that edge"),
    }
}

/// Fan-triangulate the boundary polygon of a split triangle, splitting
/// first along `chord` (an inscribed diagonal between two boundary points)
/// when present. The boundary is always convex (it's a triangle's
/// perimeter with extra points along its edges), so a fan from either half
/// of the chord split is always a valid triangulation.
fn triangulate_with_chord(boundary: &[u32], chord: Option<(u32, u32)>) -> Vec<[u32; 3]> {
    match chord {
        None => fan(boundary),
        Some((p, q)) => {
            let pi = boundary.iter().position(|&v| v == p);
            let qi = boundary.iter().position(|&v| v == q);
            match (pi, qi) {
                (Some(pi), Some(qi)) if pi != qi => {
                    let (lo, hi) = if pi < qi { (pi, qi) } else { (qi, pi) };
                    let poly_a = &boundary[lo..=hi];
                    let poly_b: Vec<u32> = boundary[hi..]
                        .iter()
                        .chain(boundary[..=lo].iter())
                        .copied()
                        .collect();
                    let mut tris = fan(poly_a);
                    tris.extend(fan(&poly_b));
                    tris
                }
                _ => fan(boundary),
            }
        }
    }
}

fn fan(poly: &[u32]) -> Vec<[u32; 3]> {
    if poly.len() < 3 {
        return Vec::new();
    }
    (1..poly.len() - 1).map(|i| [poly[0], poly[i], poly[i + 1]]).collect()
}

#[cfg(test)]
#[path = "tests_unit/epm.rs"]
mod tests;
