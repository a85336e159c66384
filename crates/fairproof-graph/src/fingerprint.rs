//! Content fingerprints for proof graphs.
//!
//! A fingerprint is a SHA-256 digest over the graph's content, fed in a
//! fixed order, so two providers holding the same proof (same vertices,
//! tags, successor order and dictionary) log the same fingerprint.

use crate::tag::TagVector;
use crate::vertex::Vertex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// A SHA-256 fingerprint, hex encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(pub String);

impl ContentHash {
    pub fn builder() -> ContentHashBuilder {
        ContentHashBuilder {
            hasher: Sha256::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accumulates graph content record by record.
///
/// Each record is a one-byte kind followed by its payload, so a vertex
/// record can never be confused with an edge or a tag record.
pub struct ContentHashBuilder {
    hasher: Sha256,
}

impl ContentHashBuilder {
    const INITIAL: u8 = b'I';
    const VERTEX: u8 = b'V';
    const TAGS: u8 = b'T';
    const EDGE: u8 = b'E';
    const AP: u8 = b'A';

    fn record(&mut self, kind: u8, payload: &[u8]) {
        self.hasher.update([kind]);
        self.hasher.update((payload.len() as u64).to_be_bytes());
        self.hasher.update(payload);
    }

    /// The proof's root obligation, if it has one.
    pub fn field_initial(mut self, initial: Option<Vertex>) -> Self {
        if let Some(v) = initial {
            self.record(Self::INITIAL, &v.0.to_be_bytes());
        }
        self
    }

    pub fn field_vertex(mut self, v: Vertex) -> Self {
        self.record(Self::VERTEX, &v.0.to_be_bytes());
        self
    }

    /// Tags of the vertex last fed, in their rendered form.
    pub fn field_tags(mut self, tags: &TagVector) -> Self {
        self.record(Self::TAGS, tags.to_string().as_bytes());
        self
    }

    /// One successor edge. Feeding edges in successor order makes the
    /// fingerprint sensitive to that order.
    pub fn field_edge(mut self, from: Vertex, to: Vertex) -> Self {
        let mut payload = [0u8; 8];
        payload[..4].copy_from_slice(&from.0.to_be_bytes());
        payload[4..].copy_from_slice(&to.0.to_be_bytes());
        self.record(Self::EDGE, &payload);
        self
    }

    /// An atomic-proposition name, in dictionary order.
    pub fn field_ap(mut self, name: &str) -> Self {
        self.record(Self::AP, name.as_bytes());
        self
    }

    pub fn finish(self) -> ContentHash {
        let hash = self.hasher.finalize();
        ContentHash(format!("{hash:x}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::Tag;

    #[test]
    fn edges_are_directed() {
        let forward = ContentHash::builder()
            .field_edge(Vertex(1), Vertex(2))
            .finish();
        let backward = ContentHash::builder()
            .field_edge(Vertex(2), Vertex(1))
            .finish();
        assert_ne!(forward, backward);
        assert_eq!(forward.as_str().len(), 64);
    }

    #[test]
    fn record_kinds_do_not_collide() {
        let as_vertex = ContentHash::builder().field_vertex(Vertex(7)).finish();
        let as_initial = ContentHash::builder()
            .field_initial(Some(Vertex(7)))
            .finish();
        assert_ne!(as_vertex, as_initial);

        let empty = ContentHash::builder().finish();
        assert_eq!(ContentHash::builder().field_initial(None).finish(), empty);
    }

    #[test]
    fn tags_and_names_are_length_delimited() {
        let split = ContentHash::builder()
            .field_ap("ab")
            .field_ap("c")
            .finish();
        let joined = ContentHash::builder()
            .field_ap("a")
            .field_ap("bc")
            .finish();
        assert_ne!(split, joined);

        let tags = TagVector::new(vec![Tag::rule("cut")]);
        assert_ne!(
            ContentHash::builder().field_tags(&tags).finish(),
            ContentHash::builder().field_tags(&TagVector::default()).finish()
        );
    }
}
