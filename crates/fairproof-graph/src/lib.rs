//! # Fairproof Graph
//!
//! The read-only side of soundness checking: a cyclic proof is a graph whose
//! vertices are proof obligations and whose edges are inference steps. Each
//! vertex carries a vector of tags (rule provenance, progress markers).
//!
//! This crate does not parse proofs. It fixes the contract a proof graph
//! must satisfy to be explored as an automaton, and ships one validated
//! in-memory realization of that contract.
//!
//! ## Architecture
//!
//! ```text
//! Vertex / VertexSet     ← Node identity, ordered successor sets
//!     │
//! Tag / TagVector        ← Per-vertex annotations, borrowed never copied
//!     │
//! ApDict                 ← Shared atomic-proposition dictionary
//!     │
//! ProofGraph             ← The provider contract (read-only)
//!     │
//! MemoryProofGraph       ← Reference provider, built from a ProofGraphSpec
//!     │
//! ContentHash            ← SHA-256 fingerprint a provider may report
//! ```

pub mod dict;
pub mod error;
pub mod fingerprint;
pub mod graph;
pub mod memory;
pub mod tag;
pub mod vertex;

pub use dict::{Ap, ApDict};
pub use error::ProofGraphError;
pub use fingerprint::{ContentHash, ContentHashBuilder};
pub use graph::ProofGraph;
pub use memory::{EdgeSpec, MemoryProofGraph, ProofGraphSpec, VertexSpec};
pub use tag::{Tag, TagVector};
pub use vertex::{Vertex, VertexCapacity, VertexSet};
