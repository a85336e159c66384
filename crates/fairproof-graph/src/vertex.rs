//! Vertex identity and successor sets.
//!
//! A vertex is an opaque node identifier with a total order and a stable
//! integer identity. The identity is what the automaton hashes, so two
//! vertices with the same identity are the same proof obligation.

use crate::error::ProofGraphError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a proof-graph node.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Vertex(pub u32);

impl Vertex {
    /// A vertex with identity `id`.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// The stable integer identity of this vertex.
    pub fn id(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<u32> for Vertex {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// The successor set of one vertex.
///
/// Order is the order in which successors were declared and never changes
/// once the graph is built. Duplicates are rejected on insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexSet(Vec<Vertex>);

impl VertexSet {
    /// An empty successor set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `v`, returning false if it was already present.
    pub fn insert(&mut self, v: Vertex) -> bool {
        if self.0.contains(&v) {
            return false;
        }
        self.0.push(v);
        true
    }

    /// Whether `v` is one of the successors.
    pub fn contains(&self, v: Vertex) -> bool {
        self.0.contains(&v)
    }

    /// Number of successors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no successors (the vertex is a leaf).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The successor at position `index` in declaration order.
    pub fn get(&self, index: usize) -> Option<Vertex> {
        self.0.get(index).copied()
    }

    /// Successors in declaration order.
    pub fn as_slice(&self) -> &[Vertex] {
        &self.0
    }

    /// Iterate successors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Vertex> for VertexSet {
    fn from_iter<I: IntoIterator<Item = Vertex>>(iter: I) -> Self {
        let mut set = Self::new();
        for v in iter {
            set.insert(v);
        }
        set
    }
}

/// Vertex-indexing capacity: room for `2^log2` vertices.
///
/// Every vertex identity in a graph sized with this capacity must be
/// strictly below [`VertexCapacity::max_vertices`].
///
/// Serializes as the bare exponent; deserialization goes through
/// [`VertexCapacity::from_log2`] and rejects exponents above 32.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct VertexCapacity {
    log2: u8,
}

impl VertexCapacity {
    /// Largest accepted exponent; vertex identities are `u32`.
    pub const MAX_LOG2: u8 = 32;

    pub fn from_log2(log2: u8) -> Result<Self, ProofGraphError> {
        if log2 > Self::MAX_LOG2 {
            return Err(ProofGraphError::InvalidCapacity(log2));
        }
        Ok(Self { log2 })
    }

    pub fn log2(self) -> u8 {
        self.log2
    }

    pub fn max_vertices(self) -> u64 {
        1u64 << self.log2
    }

    /// Whether `v` fits below the capacity bound.
    pub fn admits(self, v: Vertex) -> bool {
        u64::from(v.0) < self.max_vertices()
    }

    /// Check that `v` fits, naming it in the error otherwise.
    pub fn check(self, v: Vertex) -> Result<(), ProofGraphError> {
        if self.admits(v) {
            Ok(())
        } else {
            Err(ProofGraphError::CapacityExceeded {
                vertex: v,
                capacity: self.max_vertices(),
            })
        }
    }
}

impl TryFrom<u8> for VertexCapacity {
    type Error = ProofGraphError;

    fn try_from(log2: u8) -> Result<Self, Self::Error> {
        Self::from_log2(log2)
    }
}

impl From<VertexCapacity> for u8 {
    fn from(capacity: VertexCapacity) -> Self {
        capacity.log2
    }
}

impl Default for VertexCapacity {
    fn default() -> Self {
        Self { log2: 16 }
    }
}
