//! Symbolic transition conditions.
//!
//! A proof graph has no input alphabet of its own, so the condition on a
//! transition currently just names the successor vertex it leads to. That
//! is enough to tell sibling transitions apart. The encoding is only
//! reachable through [`Cond::successor`] and [`Cond::target`] so it can be
//! swapped for a formula over the dictionary's propositions later.

use fairproof_graph::Vertex;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cond {
    successor: Vertex,
}

impl Cond {
    /// The condition labelling the transition into `v`.
    pub fn successor(v: Vertex) -> Self {
        Self { successor: v }
    }

    /// The successor this condition selects.
    pub fn target(self) -> Vertex {
        self.successor
    }
}

impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "succ={}", self.successor)
    }
}
