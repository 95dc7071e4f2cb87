//! Output assembler (C8, spec.md §4.8): compacts the kept triangles into a
//! dense, first-seen-order vertex space and carries each vertex's scalar
//! value.

use std::collections::HashMap;

use crate::types::{Model, Triangle, UndirectedEdge, Vec3};

/// Keep only the triangles `keep` marks, remap their vertices to a dense
/// 0-based space in first-seen order, and assign each retained vertex the
/// value of an inscribed edge it sits on (NaN if it sits on none).
pub fn assemble(
    vertices: &[Vec3],
    triangles: &[Triangle],
    keep: &[bool],
    constrained: &HashMap<UndirectedEdge, f32>,
) -> (Model, Vec<f32>) {
    let mut vertex_value = vec![f32::NAN; vertices.len()];
    for (&UndirectedEdge(a, b), &value) in constrained {
        vertex_value[a as usize] = value;
        vertex_value[b as usize] = value;
    }

    let mut remap: HashMap<u32, u32> = HashMap::new();
    let mut out_vertices = Vec::new();
    let mut out_values = Vec::new();

    let mut compact = |v: u32| -> u32 {
        *remap.entry(v).or_insert_with(|| {
            let id = out_vertices.len() as u32;
            out_vertices.push(vertices[v as usize]);
            out_values.push(vertex_value[v as usize]);
            id
        })
    };

    let mut out_triangles = Vec::with_capacity(triangles.len());
    for (tri, &k) in triangles.iter().zip(keep) {
        if !k {
            continue;
        }
        out_triangles.push(Triangle::new(compact(tri.a()), compact(tri.b()), compact(tri.c())));
    }

    log::info!(
        "output assembler: {} of {} triangles kept, {} vertices retained",
        out_triangles.len(),
        triangles.len(),
        out_vertices.len()
    );

    (
        Model {
            vertices: out_vertices,
            triangles: out_triangles,
        },
        out_values,
    )
}

#[cfg(test)]
#[path = "tests_unit/output.rs"]
mod tests;
