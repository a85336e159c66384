//! Per-vertex annotations.
//!
//! Tags record where a proof obligation came from (the inference rule that
//! produced it) and whether a trace makes progress through it. They are a
//! pure function of the vertex: the provider stores one `TagVector` per
//! vertex and hands out borrows of it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One annotation on a proof-graph vertex.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Tag {
    /// The inference rule that produced this obligation.
    Rule { name: String },

    /// A progress point on the given trace.
    Progress { trace: u32 },

    /// Free-form diagnostic text.
    Note { text: String },
}

impl Tag {
    pub fn rule(name: impl Into<String>) -> Self {
        Self::Rule { name: name.into() }
    }

    pub fn progress(trace: u32) -> Self {
        Self::Progress { trace }
    }

    pub fn note(text: impl Into<String>) -> Self {
        Self::Note { text: text.into() }
    }

    pub fn is_progress(&self) -> bool {
        matches!(self, Self::Progress { .. })
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule { name } => write!(f, "rule:{name}"),
            Self::Progress { trace } => write!(f, "progress:{trace}"),
            Self::Note { text } => write!(f, "note:{text}"),
        }
    }
}

/// Ordered tags attached to one vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagVector(Vec<Tag>);

impl TagVector {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self(tags)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Tag] {
        &self.0
    }

    /// Name of the first rule tag, if any.
    pub fn rule(&self) -> Option<&str> {
        self.0.iter().find_map(|tag| match tag {
            Tag::Rule { name } => Some(name.as_str()),
            _ => None,
        })
    }

    /// Traces that make progress at this vertex.
    pub fn progress_traces(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().filter_map(|tag| match tag {
            Tag::Progress { trace } => Some(*trace),
            _ => None,
        })
    }
}

impl From<Vec<Tag>> for TagVector {
    fn from(tags: Vec<Tag>) -> Self {
        Self(tags)
    }
}

impl fmt::Display for TagVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, tag) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{tag}")?;
        }
        write!(f, "]")
    }
}
