//! The fair proof automaton.
//!
//! Wraps a borrowed proof graph so that an emptiness check can explore it.
//! The automaton starts in the ghost state, whose only transition enters
//! the proof's initial vertex; from there transitions follow the proof
//! graph's edges one for one.
//!
//! Acceptance is generalized Büchi over [`ACCEPTANCE_SETS`] sets, and every
//! transition currently carries all of them. Conditions name the successor
//! a transition leads to (see [`crate::cond`]). Both are placeholders for a
//! fairness semantics of proof steps that has not been fixed yet.

use crate::acceptance::AccCond;
use crate::config::AutomatonConfig;
use crate::contract::OmegaAutomaton;
use crate::error::AutomatonError;
use crate::iter::{ProofAutomatonIter, ProofGhostSuccIter, ProofSuccIter, SuccIterator};
use crate::state::{AutomatonState, ProofState};
use fairproof_graph::{Ap, ApDict, ContentHash, ProofGraph, Vertex, VertexCapacity};
use std::sync::Arc;
use tracing::{debug, trace};

/// Number of generalized Büchi sets carried by the automaton.
pub const ACCEPTANCE_SETS: u32 = 2;

/// A proof graph seen as a fair ω-automaton.
///
/// Borrows the provider for `'g`; states and iterators it hands out borrow
/// tag storage for the same lifetime.
pub struct FairProofAutomaton<'g, G: ProofGraph + ?Sized> {
    graph: &'g G,
    capacity: VertexCapacity,
    initial: ProofState<'g>,
    acc: AccCond,
    dict: Arc<ApDict>,
    aps: Vec<Ap>,
    fingerprint: Option<ContentHash>,
}

impl<'g, G: ProofGraph + ?Sized> FairProofAutomaton<'g, G> {
    /// Build the automaton over `graph`, sized for `capacity` vertices.
    ///
    /// Fails if the graph has no initial vertex (or no tags for it), or if
    /// its vertices do not fit the capacity.
    pub fn new(graph: &'g G, capacity: VertexCapacity) -> Result<Self, AutomatonError> {
        let vertex_count = graph.vertex_count();
        if vertex_count as u64 > capacity.max_vertices() {
            return Err(AutomatonError::CapacityExceeded {
                vertices: vertex_count,
                capacity: capacity.max_vertices(),
            });
        }
        if let Some(max) = graph.max_vertex() {
            capacity.check(max)?;
        }

        let initial = graph
            .initial_vertex()
            .ok_or(AutomatonError::MissingInitialVertex)?;
        let tags = graph
            .tags(initial)
            .ok_or(AutomatonError::MissingTags(initial))?;

        let dict = graph.dict();
        let aps: Vec<Ap> = dict.aps().collect();
        let acc = AccCond::generalized_buchi(ACCEPTANCE_SETS);
        let fingerprint = graph.fingerprint();

        debug!(
            fingerprint = fingerprint.as_ref().map_or("none", ContentHash::as_str),
            initial = %initial,
            vertices = vertex_count,
            capacity = capacity.max_vertices(),
            aps = aps.len(),
            acceptance = %acc,
            "built fair proof automaton"
        );

        Ok(Self {
            graph,
            capacity,
            initial: ProofState::new(initial, tags),
            acc,
            dict,
            aps,
            fingerprint,
        })
    }

    pub fn from_config(graph: &'g G, config: &AutomatonConfig) -> Result<Self, AutomatonError> {
        Self::new(graph, config.capacity()?)
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn capacity(&self) -> VertexCapacity {
        self.capacity
    }

    pub fn initial_vertex(&self) -> Vertex {
        self.initial.vertex()
    }

    /// Propositions registered from the dictionary at construction.
    pub fn registered_aps(&self) -> &[Ap] {
        &self.aps
    }

    /// Fingerprint the provider reported at construction, if any.
    pub fn fingerprint(&self) -> Option<&ContentHash> {
        self.fingerprint.as_ref()
    }

    /// The vertex state for `v`, if the graph contains it.
    pub fn state_of(&self, v: Vertex) -> Option<AutomatonState<'g>> {
        let graph: &'g G = self.graph;
        graph
            .tags(v)
            .map(|tags| AutomatonState::Proof(ProofState::new(v, tags)))
    }
}

impl<'g, G: ProofGraph + ?Sized> OmegaAutomaton<'g> for FairProofAutomaton<'g, G> {
    type State = AutomatonState<'g>;
    type Iter = ProofAutomatonIter<'g, G>;

    fn init_state(&self) -> AutomatonState<'g> {
        AutomatonState::ghost()
    }

    /// Panics if `state` wraps a vertex this automaton's graph lacks.
    #[track_caller]
    fn succ_iter(&self, state: &AutomatonState<'g>) -> ProofAutomatonIter<'g, G> {
        trace!(state = %state, "succ_iter");
        let all_sets = self.acc.all_sets();
        match state {
            AutomatonState::Ghost(_) => {
                ProofAutomatonIter::Ghost(ProofGhostSuccIter::new(self.initial, all_sets))
            }
            AutomatonState::Proof(proof) => {
                ProofAutomatonIter::Proof(ProofSuccIter::new(self.graph, *proof, all_sets))
            }
        }
    }

    fn acceptance(&self) -> AccCond {
        self.acc
    }

    fn dict(&self) -> &Arc<ApDict> {
        &self.dict
    }

    fn format_state(&self, state: &AutomatonState<'g>) -> String {
        match state {
            AutomatonState::Ghost(_) => "ghost".to_string(),
            AutomatonState::Proof(proof) => format!("{} {}", proof.vertex(), proof.tags()),
        }
    }

    #[track_caller]
    fn transition_annotation(&self, iter: &ProofAutomatonIter<'g, G>) -> String {
        format!("{} -> {}", iter.source(), iter.dst())
    }
}
