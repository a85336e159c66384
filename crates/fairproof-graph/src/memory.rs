//! Canonical in-memory proof graph.
//!
//! This is the reference provider:
//! - build from a serde-friendly `ProofGraphSpec` or edge by edge
//! - validate endpoints, duplicates and capacity on insertion
//! - expose deterministic, read-only queries through `ProofGraph`
//!
//! Once an exploration borrows the graph, the borrow checker keeps it
//! frozen for the rest of the session.

use crate::dict::ApDict;
use crate::error::ProofGraphError;
use crate::fingerprint::ContentHash;
use crate::graph::ProofGraph;
use crate::tag::{Tag, TagVector};
use crate::vertex::{Vertex, VertexCapacity, VertexSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Declarative description of a proof graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProofGraphSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_vertices_log2: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<Vertex>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub atomic_propositions: Vec<String>,
    pub vertices: Vec<VertexSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VertexSpec {
    pub id: Vertex,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeSpec {
    pub from: Vertex,
    pub to: Vertex,
}

#[derive(Debug, Clone, Default)]
struct VertexEntry {
    tags: TagVector,
    successors: VertexSet,
}

/// In-memory proof graph keyed by vertex identity.
#[derive(Debug, Clone)]
pub struct MemoryProofGraph {
    capacity: VertexCapacity,
    initial: Option<Vertex>,
    vertices: BTreeMap<Vertex, VertexEntry>,
    dict: Arc<ApDict>,
}

impl MemoryProofGraph {
    /// An empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: VertexCapacity) -> Self {
        Self {
            capacity,
            initial: None,
            vertices: BTreeMap::new(),
            dict: ApDict::empty(),
        }
    }

    /// Build a graph from its declarative description.
    ///
    /// All vertices are inserted before any edge, so edge order in the spec
    /// is the successor order and forward references are allowed.
    pub fn from_spec(spec: ProofGraphSpec) -> Result<Self, ProofGraphError> {
        let capacity = match spec.max_vertices_log2 {
            Some(log2) => VertexCapacity::from_log2(log2)?,
            None => VertexCapacity::default(),
        };
        let mut graph = Self::with_capacity(capacity);
        graph.set_dict(ApDict::new(spec.atomic_propositions)?);
        for vertex in spec.vertices {
            graph.add_vertex(vertex.id, TagVector::new(vertex.tags))?;
        }
        for edge in spec.edges {
            graph.add_edge(edge.from, edge.to)?;
        }
        if let Some(initial) = spec.initial {
            graph.set_initial(initial)?;
        }
        Ok(graph)
    }

    pub fn capacity(&self) -> VertexCapacity {
        self.capacity
    }

    /// Insert a vertex with its tags.
    pub fn add_vertex(&mut self, v: Vertex, tags: TagVector) -> Result<(), ProofGraphError> {
        self.capacity.check(v)?;
        if self.vertices.contains_key(&v) {
            return Err(ProofGraphError::DuplicateVertex(v));
        }
        self.vertices.insert(
            v,
            VertexEntry {
                tags,
                successors: VertexSet::new(),
            },
        );
        Ok(())
    }

    /// Append `to` to the successors of `from`. Both endpoints must exist.
    pub fn add_edge(&mut self, from: Vertex, to: Vertex) -> Result<(), ProofGraphError> {
        if !self.vertices.contains_key(&to) {
            return Err(ProofGraphError::VertexNotFound(to));
        }
        let entry = self
            .vertices
            .get_mut(&from)
            .ok_or(ProofGraphError::VertexNotFound(from))?;
        if !entry.successors.insert(to) {
            return Err(ProofGraphError::DuplicateEdge { from, to });
        }
        Ok(())
    }

    pub fn set_initial(&mut self, v: Vertex) -> Result<(), ProofGraphError> {
        if !self.vertices.contains_key(&v) {
            return Err(ProofGraphError::VertexNotFound(v));
        }
        self.initial = Some(v);
        Ok(())
    }

    pub fn set_dict(&mut self, dict: ApDict) {
        self.dict = Arc::new(dict);
    }

    /// Iterate all vertices in identity order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices.keys().copied()
    }

    /// Number of edges across all successor sets.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|entry| entry.successors.len()).sum()
    }

    /// Fingerprint of the graph's substantive content.
    ///
    /// Covers the initial vertex, every vertex with its tags and successor
    /// order, and the dictionary. Capacity is excluded.
    pub fn content_hash(&self) -> ContentHash {
        let mut builder = ContentHash::builder().field_initial(self.initial);
        for (&vertex, entry) in &self.vertices {
            builder = builder.field_vertex(vertex).field_tags(&entry.tags);
            for succ in entry.successors.iter() {
                builder = builder.field_edge(vertex, succ);
            }
        }
        for ap in self.dict.aps() {
            if let Some(name) = self.dict.name(ap) {
                builder = builder.field_ap(name);
            }
        }
        builder.finish()
    }
}

impl ProofGraph for MemoryProofGraph {
    fn initial_vertex(&self) -> Option<Vertex> {
        self.initial
    }

    fn successors(&self, v: Vertex) -> Option<&VertexSet> {
        self.vertices.get(&v).map(|entry| &entry.successors)
    }

    fn tags(&self, v: Vertex) -> Option<&TagVector> {
        self.vertices.get(&v).map(|entry| &entry.tags)
    }

    fn dict(&self) -> Arc<ApDict> {
        Arc::clone(&self.dict)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn max_vertex(&self) -> Option<Vertex> {
        self.vertices.keys().next_back().copied()
    }

    fn fingerprint(&self) -> Option<ContentHash> {
        Some(self.content_hash())
    }

    fn contains(&self, v: Vertex) -> bool {
        self.vertices.contains_key(&v)
    }
}
