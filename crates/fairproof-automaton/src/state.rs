//! Automaton states.
//!
//! Two kinds of state exist:
//!
//! - [`ProofGhostState`]: "before the proof begins". The sole initial state.
//!   All ghosts are equal and hash to [`ProofGhostState::HASH`].
//! - [`ProofState`]: one proof-graph vertex plus a borrow of its tags.
//!   Identity, order and hash come from the vertex alone.
//!
//! [`AutomatonState`] is the tagged union the exploration algorithm holds.
//! Its order puts the ghost before every vertex state. States are `Copy`:
//! cloning never touches the provider's tag storage.

use fairproof_graph::{TagVector, Vertex};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The pre-initial state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProofGhostState;

impl ProofGhostState {
    /// Hash shared by every ghost instance.
    pub const HASH: u64 = 0;
}

impl Hash for ProofGhostState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(Self::HASH);
    }
}

/// A proof-graph vertex viewed as an automaton state.
#[derive(Debug, Clone, Copy)]
pub struct ProofState<'g> {
    vertex: Vertex,
    tags: &'g TagVector,
}

impl<'g> ProofState<'g> {
    /// `tags` must be the provider's tags for `vertex`.
    pub fn new(vertex: Vertex, tags: &'g TagVector) -> Self {
        Self { vertex, tags }
    }

    pub fn vertex(&self) -> Vertex {
        self.vertex
    }

    pub fn tags(&self) -> &'g TagVector {
        self.tags
    }

    /// An owned copy of the tags, detached from the provider.
    pub fn owned_tags(&self) -> TagVector {
        self.tags.clone()
    }

    /// The vertex's integer identity.
    pub fn hash_value(&self) -> u64 {
        self.vertex.id() as u64
    }
}

impl PartialEq for ProofState<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex
    }
}

impl Eq for ProofState<'_> {}

impl PartialOrd for ProofState<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ProofState<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.vertex.cmp(&other.vertex)
    }
}

impl Hash for ProofState<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

/// Any state of the fair proof automaton.
///
/// Variant order matters: the derived `Ord` puts `Ghost` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AutomatonState<'g> {
    Ghost(ProofGhostState),
    Proof(ProofState<'g>),
}

impl<'g> AutomatonState<'g> {
    pub fn ghost() -> Self {
        Self::Ghost(ProofGhostState)
    }

    pub fn is_ghost(&self) -> bool {
        matches!(self, Self::Ghost(_))
    }

    pub fn vertex(&self) -> Option<Vertex> {
        self.as_proof().map(ProofState::vertex)
    }

    pub fn as_proof(&self) -> Option<&ProofState<'g>> {
        match self {
            Self::Ghost(_) => None,
            Self::Proof(state) => Some(state),
        }
    }

    /// Ghost hashes to a constant, vertex states to their vertex identity.
    pub fn hash_value(&self) -> u64 {
        match self {
            Self::Ghost(_) => ProofGhostState::HASH,
            Self::Proof(state) => state.hash_value(),
        }
    }
}

impl Hash for AutomatonState<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

impl From<ProofGhostState> for AutomatonState<'_> {
    fn from(ghost: ProofGhostState) -> Self {
        Self::Ghost(ghost)
    }
}

impl<'g> From<ProofState<'g>> for AutomatonState<'g> {
    fn from(state: ProofState<'g>) -> Self {
        Self::Proof(state)
    }
}

/// Short label: `ghost` or the vertex.
impl fmt::Display for AutomatonState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ghost(_) => write!(f, "ghost"),
            Self::Proof(state) => write!(f, "{}", state.vertex),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairproof_graph::Tag;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::{BTreeSet, HashSet};

    fn std_hash<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn proof_state_identity_is_the_vertex() {
        let tags = TagVector::new(vec![Tag::rule("ind")]);
        let other_tags = TagVector::new(vec![Tag::rule("ind")]);
        let a = ProofState::new(Vertex(4), &tags);
        let b = ProofState::new(Vertex(4), &other_tags);
        let c = ProofState::new(Vertex(5), &tags);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
        assert_eq!(a.hash_value(), 4);
        assert_eq!(std_hash(&a), std_hash(&b));
    }

    #[test]
    #[allow(clippy::clone_on_copy)]
    fn clone_compares_equal_and_shares_tags() {
        let tags = TagVector::new(vec![Tag::progress(1)]);
        let state = ProofState::new(Vertex(2), &tags);
        let copy = state.clone();
        assert_eq!(copy, state);
        assert!(std::ptr::eq(copy.tags(), state.tags()));
        assert_eq!(state.owned_tags(), tags);

        let ghost = AutomatonState::ghost();
        assert_eq!(ghost.clone(), ghost);
    }

    #[test]
    fn ghosts_are_equal_and_order_first() {
        let tags = TagVector::default();
        let ghost = AutomatonState::ghost();
        let zero = AutomatonState::from(ProofState::new(Vertex(0), &tags));

        assert_eq!(AutomatonState::ghost(), AutomatonState::from(ProofGhostState));
        assert_ne!(ghost, zero);
        assert!(ghost < zero);
        assert_eq!(ghost.cmp(&ghost), Ordering::Equal);
        assert_eq!(ghost.hash_value(), ProofGhostState::HASH);
        assert_eq!(std_hash(&ghost), std_hash(&AutomatonState::ghost()));
    }

    #[test]
    fn states_work_in_ordered_and_hashed_containers() {
        let tags = TagVector::default();
        let states = [
            AutomatonState::from(ProofState::new(Vertex(3), &tags)),
            AutomatonState::ghost(),
            AutomatonState::from(ProofState::new(Vertex(1), &tags)),
            AutomatonState::from(ProofState::new(Vertex(3), &tags)),
            AutomatonState::ghost(),
        ];

        let ordered: BTreeSet<_> = states.iter().copied().collect();
        let labels: Vec<String> = ordered.iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["ghost", "v1", "v3"]);

        let hashed: HashSet<_> = states.iter().copied().collect();
        assert_eq!(hashed.len(), 3);
    }
}
