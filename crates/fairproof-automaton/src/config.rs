//! Automaton construction parameters.

use crate::error::AutomatonError;
use fairproof_graph::VertexCapacity;
use serde::{Deserialize, Serialize};

/// Default capacity exponent: room for 65536 vertices.
pub const DEFAULT_MAX_VERTICES_LOG2: u8 = 16;

/// Parameters accepted by [`crate::FairProofAutomaton::from_config`].
///
/// ```toml
/// max_vertices_log2 = 12
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct AutomatonConfig {
    /// The automaton indexes up to `2^max_vertices_log2` vertices.
    pub max_vertices_log2: u8,
}

impl AutomatonConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, AutomatonError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn capacity(&self) -> Result<VertexCapacity, AutomatonError> {
        Ok(VertexCapacity::from_log2(self.max_vertices_log2)?)
    }
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        Self {
            max_vertices_log2: DEFAULT_MAX_VERTICES_LOG2,
        }
    }
}
