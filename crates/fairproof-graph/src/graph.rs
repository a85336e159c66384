//! The proof graph provider contract.
//!
//! A provider is the read-only graph a soundness check explores. It lives
//! for the whole checking session and is never mutated while any
//! exploration borrows it. Everything it hands out (successor sets, tag
//! vectors) is borrowed from its own storage for that lifetime.

use crate::dict::ApDict;
use crate::fingerprint::ContentHash;
use crate::tag::TagVector;
use crate::vertex::{Vertex, VertexSet};
use std::sync::Arc;

/// Read-only access to a cyclic proof graph.
///
/// Lookups return `None` for vertices the provider does not contain.
/// Callers treat that as a contract violation, never as an empty answer.
pub trait ProofGraph {
    /// The root obligation of the proof, if the graph has one.
    fn initial_vertex(&self) -> Option<Vertex>;

    /// Successors of `v`, in provider order.
    fn successors(&self, v: Vertex) -> Option<&VertexSet>;

    /// Tags attached to `v`.
    fn tags(&self, v: Vertex) -> Option<&TagVector>;

    /// The shared atomic-proposition dictionary.
    fn dict(&self) -> Arc<ApDict>;

    /// Number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Largest vertex identity in the graph.
    fn max_vertex(&self) -> Option<Vertex>;

    /// Content fingerprint used to identify the graph in logs.
    ///
    /// Providers that cannot fingerprint their content return `None`.
    fn fingerprint(&self) -> Option<ContentHash> {
        None
    }

    /// Whether the graph contains `v`.
    fn contains(&self, v: Vertex) -> bool {
        self.successors(v).is_some()
    }
}
