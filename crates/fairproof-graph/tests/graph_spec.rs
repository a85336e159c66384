//! Integration tests: build in-memory proof graphs from declarative specs.

use fairproof_graph::{MemoryProofGraph, ProofGraph, ProofGraphSpec, Tag, Vertex};

fn parse(raw: &str) -> ProofGraphSpec {
    serde_json::from_str(raw).unwrap_or_else(|e| panic!("failed to parse spec: {e}"))
}

#[test]
fn builds_cyclic_proof_from_spec() {
    let spec = parse(
        r#"{
            "maxVerticesLog2": 4,
            "initial": 0,
            "atomicPropositions": ["unfolded"],
            "vertices": [
                {"id": 0, "tags": [{"kind": "rule", "name": "ind"}]},
                {"id": 1, "tags": [{"kind": "rule", "name": "case"}, {"kind": "progress", "trace": 0}]},
                {"id": 2}
            ],
            "edges": [
                {"from": 0, "to": 1},
                {"from": 1, "to": 2},
                {"from": 1, "to": 0}
            ]
        }"#,
    );
    let graph = MemoryProofGraph::from_spec(spec).expect("spec must build");

    assert_eq!(graph.initial_vertex(), Some(Vertex(0)));
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.capacity().max_vertices(), 16);
    assert_eq!(
        graph.successors(Vertex(1)).unwrap().as_slice(),
        &[Vertex(2), Vertex(0)]
    );
    assert!(graph.successors(Vertex(2)).unwrap().is_empty());
    assert_eq!(
        graph.tags(Vertex(1)).unwrap().as_slice(),
        &[Tag::rule("case"), Tag::progress(0)]
    );
    assert!(graph.tags(Vertex(2)).unwrap().is_empty());
    assert_eq!(graph.dict().len(), 1);
}

#[test]
fn spec_without_initial_builds_but_reports_none() {
    let graph = MemoryProofGraph::from_spec(parse(r#"{"vertices": [{"id": 3}]}"#)).unwrap();
    assert_eq!(graph.initial_vertex(), None);
    assert_eq!(graph.max_vertex(), Some(Vertex(3)));
}

#[test]
fn dangling_edge_is_rejected() {
    let err = MemoryProofGraph::from_spec(parse(
        r#"{"vertices": [{"id": 0}], "edges": [{"from": 0, "to": 9}]}"#,
    ))
    .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"vertex not found: v9");
}

#[test]
fn vertex_beyond_capacity_is_rejected() {
    let err = MemoryProofGraph::from_spec(parse(
        r#"{"maxVerticesLog2": 2, "vertices": [{"id": 4}]}"#,
    ))
    .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"vertex v4 exceeds capacity of 4 vertices");
}

#[test]
fn unknown_spec_fields_are_rejected() {
    let result = serde_json::from_str::<ProofGraphSpec>(r#"{"vertices": [], "root": 0}"#);
    assert!(result.is_err());
}
