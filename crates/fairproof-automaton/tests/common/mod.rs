//! Breadth-first driver over the automaton contract, shared by the
//! integration tests. It plays the part of the external exploration
//! algorithm: it only uses `OmegaAutomaton` and `SuccIterator`.

#![allow(dead_code)]

use fairproof_automaton::{OmegaAutomaton, SuccIterator, Transition};
use fairproof_graph::{MemoryProofGraph, ProofGraphSpec};
use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;

/// One explored state with its transitions, in enumeration order.
pub struct Explored<S> {
    pub state: S,
    pub transitions: Vec<Transition<S>>,
}

/// Explore every state reachable from the initial state, in BFS
/// discovery order.
pub fn explore<'g, A: OmegaAutomaton<'g>>(aut: &A) -> Vec<Explored<A::State>> {
    let init = aut.init_state();
    let mut seen = HashSet::from([init.clone()]);
    let mut queue = VecDeque::from([init]);
    let mut explored = Vec::new();

    while let Some(state) = queue.pop_front() {
        let mut iter = aut.succ_iter(&state);
        let mut transitions = Vec::new();
        let mut more = iter.first();
        while more {
            let dst = iter.dst();
            transitions.push(Transition {
                dst: dst.clone(),
                cond: iter.cond(),
                acc: iter.acc(),
            });
            if seen.insert(dst.clone()) {
                queue.push_back(dst);
            }
            more = iter.next();
        }
        explored.push(Explored { state, transitions });
    }

    explored
}

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn load_graph(name: &str) -> MemoryProofGraph {
    let path = fixtures_dir().join(name).join("graph.json");
    let raw = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    let spec: ProofGraphSpec = serde_json::from_str(&raw)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", path.display()));
    MemoryProofGraph::from_spec(spec)
        .unwrap_or_else(|e| panic!("failed to build {}: {e}", path.display()))
}
