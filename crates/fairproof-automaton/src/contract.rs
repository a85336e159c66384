//! The generic automaton contract.
//!
//! This is the surface an exploration or emptiness-check algorithm is
//! written against. It knows nothing about proofs: states only need to be
//! comparable, hashable and cheap to clone, and successors are enumerated
//! through a [`SuccIterator`].

use crate::acceptance::AccCond;
use crate::iter::SuccIterator;
use fairproof_graph::ApDict;
use std::hash::Hash;
use std::sync::Arc;

/// A transition-based ω-automaton with generalized Büchi acceptance.
pub trait OmegaAutomaton<'g> {
    type State: Clone + Eq + Ord + Hash + 'g;
    type Iter: SuccIterator<State = Self::State>;

    /// A fresh initial state, owned by the caller.
    fn init_state(&self) -> Self::State;

    /// A fresh successor iterator over `state`.
    fn succ_iter(&self, state: &Self::State) -> Self::Iter;

    fn acceptance(&self) -> AccCond;

    fn dict(&self) -> &Arc<ApDict>;

    /// Human-readable label for diagnostics.
    fn format_state(&self, state: &Self::State) -> String;

    /// Human-readable label for the transition `iter` is positioned on.
    fn transition_annotation(&self, iter: &Self::Iter) -> String;
}
