//! Mesh adjacency graph (C1): per-vertex adjacency with edge lengths, and
//! the opposite-vertex lookup per oriented edge (spec.md §4.1).

use std::collections::HashMap;

use crate::error::{MeshError, Result};
use crate::types::{OrientedEdge, Triangle, UndirectedEdge, Vec3};

/// Adjacency and opposite-vertex maps for a triangulated mesh.
///
/// Rebuilt from scratch whenever the underlying vertex/triangle arrays
/// change: once after the input model is loaded, and again after
/// refinement (C3) produces its denser mesh (spec.md §2 dataflow).
///
/// # Example
///
/// ```
/// use meshembed::topology::MeshGraph;
/// use meshembed::types::{Triangle, Vec3};
///
/// let verts = vec![
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(1.0, 0.0, 0.0),
///     Vec3::new(0.0, 1.0, 0.0),
/// ];
/// let tris = vec![Triangle::new(0, 1, 2)];
/// let graph = MeshGraph::build(&verts, &tris).unwrap();
/// assert_eq!(graph.adjacency(0).len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MeshGraph {
    adjacency: Vec<Vec<(u32, f32)>>,
    opposite: HashMap<OrientedEdge, u32>,
}

impl MeshGraph {
    /// Build the adjacency and opposite-vertex maps from `vertices` and
    /// `triangles`.
    ///
    /// # Errors
    /// [`MeshError::VertexIndexOutOfRange`] if a triangle references a
    /// vertex past the end of `vertices`; [`MeshError::DegenerateTriangle`]
    /// if a triangle has repeated vertex indices or two geometrically
    /// coincident corners; [`MeshError::NonManifoldEdge`] if the same
    /// oriented edge appears in more than one triangle, violating the
    /// manifold precondition.
    pub fn build(vertices: &[Vec3], triangles: &[Triangle]) -> Result<Self> {
        let num_vertices = vertices.len();
        let mut opposite = HashMap::with_capacity(triangles.len() * 3);
        let mut lengths: HashMap<UndirectedEdge, f32> = HashMap::new();

        for tri in triangles {
            let [a, b, c] = tri.0;
            if a as usize >= num_vertices || b as usize >= num_vertices || c as usize >= num_vertices
            {
                return Err(MeshError::VertexIndexOutOfRange {
                    a,
                    b,
                    c,
                    num_vertices,
                });
            }
            if a == b || b == c || c == a {
                return Err(MeshError::DegenerateTriangle { a, b, c });
            }
            let (pa, pb, pc) = (
                vertices[a as usize],
                vertices[b as usize],
                vertices[c as usize],
            );
            if pa == pb || pb == pc || pc == pa {
                return Err(MeshError::DegenerateTriangle { a, b, c });
            }

            for &(x, y, z) in &[(a, b, c), (b, c, a), (c, a, b)] {
                let oe = OrientedEdge::new(x, y);
                if opposite.insert(oe, z).is_some() {
                    return Err(MeshError::NonManifoldEdge { a: x, b: y });
                }
                let ue = UndirectedEdge::new(x, y);
                lengths
                    .entry(ue)
                    .or_insert_with(|| (vertices[y as usize] - vertices[x as usize]).norm());
            }
        }

        let mut adjacency = vec![Vec::new(); num_vertices];
        for (UndirectedEdge(x, y), len) in lengths {
            adjacency[x as usize].push((y, len));
            adjacency[y as usize].push((x, len));
        }
        sort_adjacency(&mut adjacency);

        Ok(Self { adjacency, opposite })
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    pub fn adjacency(&self, v: u32) -> &[(u32, f32)] {
        &self.adjacency[v as usize]
    }

    pub fn opposite(&self, edge: OrientedEdge) -> Option<u32> {
        self.opposite.get(&edge).copied()
    }

    /// Replace the adjacency lists wholesale, re-sorting each for
    /// determinism (spec.md §4.4, §5). Used by C4 to install the
    /// shortcut-augmented graph; the opposite-vertex map (a property of the
    /// triangulation, not the adjacency) is left untouched.
    pub fn set_adjacency(&mut self, adjacency: Vec<Vec<(u32, f32)>>) {
        self.adjacency = adjacency;
        sort_adjacency(&mut self.adjacency);
    }

    /// Augment this graph's adjacency in place with unfolded-triangle-fan
    /// shortcut edges (C4, spec.md §4.4).
    pub fn augment_with_unfolding(&mut self, vertices: &[Vec3], triangles: &[Triangle]) {
        let augmented = super::unfold::augment(vertices, triangles, &self.opposite, &self.adjacency);
        self.set_adjacency(augmented);
    }
}

fn sort_adjacency(adjacency: &mut [Vec<(u32, f32)>]) {
    for list in adjacency.iter_mut() {
        list.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.partial_cmp(&b.1).unwrap()));
    }
}

#[cfg(test)]
#[path = "../tests_unit/topology/mesh_graph.rs"]
mod tests;
