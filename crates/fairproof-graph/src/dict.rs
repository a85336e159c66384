//! Shared atomic-proposition dictionary.
//!
//! Transition conditions of the automaton are formulas over atomic
//! propositions. The provider owns the dictionary; the automaton registers
//! every proposition in it at construction and reads it afterwards. Once
//! built the dictionary is immutable and is shared behind an `Arc`.

use crate::error::ProofGraphError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Handle to one atomic proposition in an [`ApDict`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Ap(pub u32);

impl Ap {
    /// The handle for the proposition registered at `index`.
    pub fn from_index(index: usize) -> Result<Self, ProofGraphError> {
        u32::try_from(index)
            .map(Self)
            .map_err(|_| ProofGraphError::TooManyAtomicPropositions(index))
    }
}

impl fmt::Display for Ap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ap{}", self.0)
    }
}

/// Immutable dictionary of atomic propositions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApDict {
    names: Vec<String>,
    index: BTreeMap<String, Ap>,
}

impl ApDict {
    /// Build a dictionary from names, assigning handles in order.
    pub fn new<I, S>(names: I) -> Result<Self, ProofGraphError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dict = Self::default();
        for name in names {
            let name = name.into();
            if dict.index.contains_key(&name) {
                return Err(ProofGraphError::DuplicateAtomicProposition(name));
            }
            let ap = Ap::from_index(dict.names.len())?;
            dict.index.insert(name.clone(), ap);
            dict.names.push(name);
        }
        Ok(dict)
    }

    /// An empty dictionary, already shared.
    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of registered propositions.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no proposition is registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The handle registered for `name`.
    pub fn lookup(&self, name: &str) -> Result<Ap, ProofGraphError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| ProofGraphError::UnknownAtomicProposition(name.to_string()))
    }

    /// The name behind `ap`, or `None` for a handle from another dictionary.
    pub fn name(&self, ap: Ap) -> Option<&str> {
        self.names.get(ap.0 as usize).map(String::as_str)
    }

    /// All handles, in registration order.
    pub fn aps(&self) -> impl Iterator<Item = Ap> + '_ {
        // Every index below `len` was checked by `Ap::from_index` in `new`.
        (0..self.names.len()).map(|index| Ap(index as u32))
    }
}
