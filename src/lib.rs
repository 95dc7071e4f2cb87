//! # meshembed
//!
//! A mesh-constraint embedding engine: given a triangulated surface and a
//! set of coarse vertex-pick constraints, snaps each constraint to a
//! geodesic path, refines the mesh to a uniform edge-length cap, inscribes
//! each constraint's (possibly radius-offset) contour as real triangle
//! edges, and prunes the result down to the triangles actually bounded by
//! two or more distinct constraint values.
//!
//! ## Example
//!
//! ```
//! use meshembed::prelude::*;
//!
//! let model = Model {
//!     vertices: vec![
//!         Vec3::new(0.0, 0.0, 0.0),
//!         Vec3::new(1.0, 0.0, 0.0),
//!         Vec3::new(0.0, 1.0, 0.0),
//! ],
//!     triangles: vec![Triangle::new(0, 1, 2)],
//! };
//! let params = Parameters::new(1.0).unwrap();
//! let (out, values, _debug) = embed_constraints(&model, &[], &params).unwrap();
//! assert_eq!(out, model);
//! assert!(values.iter().all(|v| v.is_nan()));
//! ```
//!
//! ## Layout
//!
//! Pipeline stages run in the order `topology::mesh_graph` (C1) →
//! `geodesic` (C2) → `refine` (C3) → `topology::mesh_graph` rebuild + C1' →
//! `topology::unfold` (C4) → `levelset` (C5) → `epm` (C6) → `components`
//! (C7) → `output` (C8), wired together by [`pipeline::embed_constraints`].

pub mod components;
pub mod config;
pub mod dijkstra;
pub mod epm;
pub mod error;
pub mod geodesic;
pub mod levelset;
pub mod output;
pub mod pipeline;
pub mod refine;
pub mod topology;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::Parameters;
    pub use crate::error::{MeshError, Result};
    pub use crate::pipeline::{embed_constraints, DebugOutput};
    pub use crate::types::{Constraint, EmbeddedVertex, Model, OrientedEdge, Triangle, UndirectedEdge, Vec3};
}

pub use config::Parameters;
pub use error::{MeshError, Result};
pub use pipeline::{embed_constraints, DebugOutput};
pub use types::{Constraint, Model, Triangle, Vec3};
