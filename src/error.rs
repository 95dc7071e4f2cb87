//! Error types for the meshembed library.

use thiserror::Error;

/// Errors that can occur while embedding constraints into a mesh.
///
/// These correspond to the "input contract violation" class in spec.md §7:
/// conditions the caller is responsible for avoiding. Internal pipeline
/// invariants (e.g. "refinement leaves no over-length edge") are
/// `debug_assert!`s instead, since violating them would be this crate's own
/// bug rather than the caller's.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// `Parameters::new` was given a non-positive `max_edge_length`.
    #[error("invalid parameters: max_edge_length must be > 0, got {max_edge_length}")]
    InvalidParameters { max_edge_length: f32 },

    /// A triangle references the same vertex twice, or two of its vertices
    /// share a position (zero-area triangle).
    #[error("degenerate triangle ({a}, {b}, {c})")]
    DegenerateTriangle { a: u32, b: u32, c: u32 },

    /// A triangle references a vertex index past the end of the vertex array.
    #[error("triangle ({a}, {b}, {c}) references vertex index >= {num_vertices}")]
    VertexIndexOutOfRange {
        a: u32,
        b: u32,
        c: u32,
        num_vertices: usize,
    },

    /// The same oriented edge `(a, b)` appears in more than one triangle:
    /// the input is not a manifold triangulation.
    #[error("non-manifold oriented edge ({a}, {b}): appears in more than one triangle")]
    NonManifoldEdge { a: u32, b: u32 },

    /// A constraint's chain references a vertex index past the end of the
    /// *original* (pre-refinement) vertex array.
    #[error("constraint chain references vertex index {index} >= {num_vertices}")]
    ConstraintVertexOutOfRange { index: u32, num_vertices: usize },

    /// A constraint's `radius` was negative.
    #[error("constraint radius must be >= 0, got {radius}")]
    NegativeRadius { radius: f32 },
}

/// Result type alias for meshembed operations.
pub type Result<T> = std::result::Result<T, MeshError>;
