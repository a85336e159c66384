//! Error types for proof graph construction.

use crate::vertex::Vertex;

/// Errors arising while building or validating a proof graph.
#[derive(Debug, thiserror::Error)]
pub enum ProofGraphError {
    /// An edge or lookup names a vertex the graph does not contain.
    #[error("vertex not found: {0}")]
    VertexNotFound(Vertex),

    /// The same vertex was declared twice.
    #[error("duplicate vertex: {0}")]
    DuplicateVertex(Vertex),

    /// The same edge was declared twice.
    #[error("duplicate edge: {from} -> {to}")]
    DuplicateEdge { from: Vertex, to: Vertex },

    /// A vertex identity does not fit the configured vertex capacity.
    #[error("vertex {vertex} exceeds capacity of {capacity} vertices")]
    CapacityExceeded { vertex: Vertex, capacity: u64 },

    /// The capacity exponent is outside `0..=32`.
    #[error("invalid vertex capacity: 2^{0}")]
    InvalidCapacity(u8),

    /// An atomic proposition name was looked up but never registered.
    #[error("unknown atomic proposition: {0}")]
    UnknownAtomicProposition(String),

    /// The dictionary ran out of `u32` handles.
    #[error("too many atomic propositions: handle {0} does not fit in 32 bits")]
    TooManyAtomicPropositions(usize),

    /// An atomic proposition name was registered twice.
    #[error("duplicate atomic proposition: {0}")]
    DuplicateAtomicProposition(String),
}
