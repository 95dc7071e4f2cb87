//! Top-level dataflow glue (spec.md §2): wires C1 through C8 into the
//! single `embed_constraints` entry point.

use crate::components::filter_components;
use crate::config::Parameters;
use crate::epm::EmbeddedPlanarMap;
use crate::error::{MeshError, Result};
use crate::geodesic;
use crate::levelset;
use crate::output;
use crate::topology::MeshGraph;
use crate::types::{Constraint, Model, UndirectedEdge, Vec3};

/// Optional per-constraint polylines, useful for visualizing what the
/// pipeline did (spec.md §6: "optional debug outputs").
#[derive(Debug, Clone, Default)]
pub struct DebugOutput {
    /// Snapped path vertices, in refined-mesh coordinates, one per
    /// constraint (empty where the chain itself was empty).
    pub snapped_paths: Vec<Vec<u32>>,
    /// Per-constraint closed-loop contour, as mesh-space positions, one
    /// entry per constraint (empty where no contour was produced: a
    /// zero-radius constraint, or a positive-radius one whose offset
    /// contour never closed).
    pub contour_loops: Vec<Vec<Vec3>>,
}

/// Embed `constraints` into `model`, refining it so no edge exceeds
/// `params.max_edge_length()` and inscribing every constraint's
/// (possibly radius-offset) contour as actual triangle edges.
///
/// Returns the constrained, pruned output model alongside one scalar value
/// per output vertex (NaN where no inscribed edge touches that vertex), and
/// the debug polylines produced along the way.
///
/// Per spec.md §6, an empty `constraints` list returns `model` unchanged
/// with an all-NaN value array -- C3 through C8 are skipped entirely.
pub fn embed_constraints(
    model: &Model,
    constraints: &[Constraint],
    params: &Parameters,
) -> Result<(Model, Vec<f32>, DebugOutput)> {
    if constraints.is_empty() {
        log::info!("embed_constraints: no constraints, returning input model unchanged");
        return Ok((model.clone(), vec![f32::NAN; model.vertices.len()], DebugOutput::default()));
    }

    for constraint in constraints {
        if constraint.radius < 0.0 {
            return Err(MeshError::NegativeRadius { radius: constraint.radius });
        }
    }

    let graph = MeshGraph::build(&model.vertices, &model.triangles)?;
    let chains: Vec<Vec<u32>> = constraints.iter().map(|c| c.chain.clone()).collect();
    let mut paths = geodesic::snap_chains(&graph, &chains)?;

    let refined = crate::refine::refine(model, &mut paths, params);

    let mut graph = MeshGraph::build(&refined.vertices, &refined.triangles)?;
    graph.augment_with_unfolding(&refined.vertices, &refined.triangles);

    let mut epm = EmbeddedPlanarMap::new(&refined.vertices, &refined.triangles, params.epm_merge_tolerance());
    let mut contour_loops = Vec::with_capacity(constraints.len());

    for (constraint, path) in constraints.iter().zip(&paths) {
        let chain = levelset::embed_constraint(&graph, &refined.triangles, path, constraint.radius);

        contour_loops.push(if constraint.radius > 0.0 {
            chain.iter().map(|ev| ev.interpolate(&refined.vertices)).collect()
        } else {
            Vec::new()
        });

        let ids: Vec<u32> = chain.iter().map(|&ev| epm.add_vertex(ev)).collect();
        for window in ids.windows(2) {
            epm.add_edge(window[0], window[1], constraint.value);
        }
    }

    let (embedded_vertices, split_triangles, _epm_to_split) = epm.split_triangles(&refined.triangles);
    let split_vertex_positions: Vec<_> = embedded_vertices
        .iter()
        .map(|ev| ev.interpolate(&refined.vertices))
        .collect();

    let mut constrained: std::collections::HashMap<UndirectedEdge, f32> = std::collections::HashMap::new();
    for (a, b, value) in epm.inscribed_edges() {
        constrained.insert(UndirectedEdge::new(a, b), value);
    }

    let keep = filter_components(&split_triangles, &constrained);
    let (out_model, out_values) = output::assemble(&split_vertex_positions, &split_triangles, &keep, &constrained);

    let debug = DebugOutput {
        snapped_paths: paths,
        contour_loops,
    };

    Ok((out_model, out_values, debug))
}

#[cfg(test)]
#[path = "tests_unit/pipeline.rs"]
mod tests;
