//! Error types for automaton construction and configuration.
//!
//! Only configuration faults are recoverable. Misuse of states or
//! iterators by the exploring caller is a contract violation and panics.

use fairproof_graph::{ProofGraphError, Vertex};

#[derive(Debug, thiserror::Error)]
pub enum AutomatonError {
    /// The provider has no root obligation to start from.
    #[error("proof graph has no initial vertex")]
    MissingInitialVertex,

    /// The provider knows the initial vertex but not its tags.
    #[error("proof graph has no tags for initial vertex {0}")]
    MissingTags(Vertex),

    /// The provider holds more vertices than the capacity hint admits.
    #[error("proof graph has {vertices} vertices but capacity is {capacity}")]
    CapacityExceeded { vertices: usize, capacity: u64 },

    /// An acceptance condition asked for more sets than a mark can hold.
    #[error("at most 32 acceptance sets are supported, got {0}")]
    TooManyAcceptanceSets(u32),

    #[error("invalid automaton config: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Graph(#[from] ProofGraphError),
}
