//! # Fairproof Automaton
//!
//! A cyclic proof is sound iff the ω-automaton built from its proof graph
//! accepts no infinite run. This crate builds that automaton; deciding
//! emptiness is left to a generic checker written against
//! [`OmegaAutomaton`].
//!
//! ## Architecture
//!
//! ```text
//! ProofGraph (fairproof-graph)   ← Read-only provider, borrowed for 'g
//!     │
//! AutomatonState                 ← Ghost | Proof(vertex, &tags)
//!     │
//! ProofAutomatonIter             ← Ghost → initial, vertex → successors
//!     │
//! FairProofAutomaton             ← init state, dispatch, Inf(0)&Inf(1)
//! ```
//!
//! ```
//! use fairproof_automaton::{FairProofAutomaton, OmegaAutomaton, SuccIterator};
//! use fairproof_graph::{MemoryProofGraph, TagVector, Vertex, VertexCapacity};
//!
//! let mut graph = MemoryProofGraph::with_capacity(VertexCapacity::default());
//! graph.add_vertex(Vertex(0), TagVector::default()).unwrap();
//! graph.add_edge(Vertex(0), Vertex(0)).unwrap();
//! graph.set_initial(Vertex(0)).unwrap();
//!
//! let aut = FairProofAutomaton::new(&graph, VertexCapacity::default()).unwrap();
//! let mut iter = aut.succ_iter(&aut.init_state());
//! assert!(iter.first());
//! assert_eq!(iter.dst().vertex(), Some(Vertex(0)));
//! ```

pub mod acceptance;
pub mod automaton;
pub mod cond;
pub mod config;
pub mod contract;
pub mod error;
pub mod iter;
pub mod state;

pub use acceptance::{AccCond, Mark};
pub use automaton::{ACCEPTANCE_SETS, FairProofAutomaton};
pub use cond::Cond;
pub use config::{AutomatonConfig, DEFAULT_MAX_VERTICES_LOG2};
pub use contract::OmegaAutomaton;
pub use error::AutomatonError;
pub use iter::{
    ProofAutomatonIter, ProofGhostSuccIter, ProofSuccIter, SuccIterator, Transition, Transitions,
};
pub use state::{AutomatonState, ProofGhostState, ProofState};
