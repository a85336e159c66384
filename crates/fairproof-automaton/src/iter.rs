//! Successor iterators.
//!
//! Every iterator follows the same protocol, driven by the exploring
//! caller:
//!
//! ```text
//! NOT_STARTED ──first()──▶ READY(pending transition) ──next()──▶ … ──▶ DONE
//! ```
//!
//! `dst`, `cond` and `acc` describe the pending transition and are only
//! defined while READY; calling them anywhere else panics. [`SuccIterator::transition`]
//! is the checkable form. Once DONE, `next()` stays DONE; `first()` always
//! restarts from the beginning.
//!
//! Destinations are always vertex states: no iterator can yield the ghost.

use crate::acceptance::Mark;
use crate::cond::Cond;
use crate::state::{AutomatonState, ProofState};
use fairproof_graph::{ProofGraph, Vertex, VertexSet};

/// One outgoing transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition<S> {
    pub dst: S,
    pub cond: Cond,
    pub acc: Mark,
}

/// The successor-iterator protocol.
pub trait SuccIterator {
    type State;

    /// Position on the first transition; true iff one exists.
    fn first(&mut self) -> bool;

    /// Advance; true iff still on a transition.
    fn next(&mut self) -> bool;

    /// Whether enumeration is finished.
    fn done(&self) -> bool;

    /// Destination of the pending transition.
    fn dst(&self) -> Self::State;

    /// Condition of the pending transition.
    fn cond(&self) -> Cond;

    /// Acceptance marks of the pending transition.
    fn acc(&self) -> Mark;

    /// The pending transition, or `None` when not on one.
    fn transition(&self) -> Option<Transition<Self::State>>;

    /// Restart from `first()` and drain the enumeration as a std iterator.
    fn transitions(self) -> Transitions<Self>
    where
        Self: Sized,
    {
        Transitions {
            inner: self,
            started: false,
        }
    }
}

/// Adapter returned by [`SuccIterator::transitions`].
pub struct Transitions<I> {
    inner: I,
    started: bool,
}

impl<I: SuccIterator> Iterator for Transitions<I> {
    type Item = Transition<I::State>;

    fn next(&mut self) -> Option<Self::Item> {
        let on_transition = if self.started {
            self.inner.next()
        } else {
            self.started = true;
            self.inner.first()
        };
        if on_transition {
            self.inner.transition()
        } else {
            None
        }
    }
}

#[track_caller]
fn not_ready(accessor: &str) -> ! {
    panic!("{accessor}() called while the successor iterator is not on a transition")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    NotStarted,
    Ready,
    Done,
}

/// The single bookkeeping transition from the ghost to the initial vertex.
///
/// It is not a proof step, so it carries every acceptance set and never
/// blocks a fairness constraint.
#[derive(Debug, Clone)]
pub struct ProofGhostSuccIter<'g> {
    initial: ProofState<'g>,
    all_sets: Mark,
    phase: Phase,
}

impl<'g> ProofGhostSuccIter<'g> {
    pub fn new(initial: ProofState<'g>, all_sets: Mark) -> Self {
        Self {
            initial,
            all_sets,
            phase: Phase::NotStarted,
        }
    }

    fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }
}

impl<'g> SuccIterator for ProofGhostSuccIter<'g> {
    type State = ProofState<'g>;

    fn first(&mut self) -> bool {
        self.phase = Phase::Ready;
        true
    }

    #[track_caller]
    fn next(&mut self) -> bool {
        match self.phase {
            Phase::NotStarted => panic!("next() called before first()"),
            Phase::Ready | Phase::Done => self.phase = Phase::Done,
        }
        false
    }

    fn done(&self) -> bool {
        self.phase == Phase::Done
    }

    #[track_caller]
    fn dst(&self) -> ProofState<'g> {
        if !self.is_ready() {
            not_ready("dst");
        }
        self.initial
    }

    #[track_caller]
    fn cond(&self) -> Cond {
        if !self.is_ready() {
            not_ready("cond");
        }
        Cond::successor(self.initial.vertex())
    }

    #[track_caller]
    fn acc(&self) -> Mark {
        if !self.is_ready() {
            not_ready("acc");
        }
        self.all_sets
    }

    fn transition(&self) -> Option<Transition<ProofState<'g>>> {
        self.is_ready().then(|| Transition {
            dst: self.initial,
            cond: Cond::successor(self.initial.vertex()),
            acc: self.all_sets,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    NotStarted,
    At(usize),
}

/// Enumerates the real successors of one vertex, in provider order.
pub struct ProofSuccIter<'g, G: ?Sized> {
    graph: &'g G,
    source: ProofState<'g>,
    successors: &'g VertexSet,
    all_sets: Mark,
    cursor: Cursor,
}

impl<'g, G: ProofGraph + ?Sized> ProofSuccIter<'g, G> {
    /// Panics if the provider does not know the source vertex.
    #[track_caller]
    pub fn new(graph: &'g G, source: ProofState<'g>, all_sets: Mark) -> Self {
        let successors = graph.successors(source.vertex()).unwrap_or_else(|| {
            panic!(
                "state {} does not belong to this proof graph",
                source.vertex()
            )
        });
        Self {
            graph,
            source,
            successors,
            all_sets,
            cursor: Cursor::NotStarted,
        }
    }

    pub fn source(&self) -> ProofState<'g> {
        self.source
    }

    /// Number of transitions this iterator enumerates in total.
    pub fn len(&self) -> usize {
        self.successors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    fn current(&self) -> Option<Vertex> {
        match self.cursor {
            Cursor::NotStarted => None,
            Cursor::At(index) => self.successors.get(index),
        }
    }

    #[track_caller]
    fn current_or_panic(&self, accessor: &str) -> Vertex {
        match self.current() {
            Some(v) => v,
            None => not_ready(accessor),
        }
    }

    #[track_caller]
    fn state_of(&self, v: Vertex) -> ProofState<'g> {
        let tags = self.graph.tags(v).unwrap_or_else(|| {
            panic!(
                "proof graph has no tags for successor {v} of {}",
                self.source.vertex()
            )
        });
        ProofState::new(v, tags)
    }
}

impl<'g, G: ProofGraph + ?Sized> SuccIterator for ProofSuccIter<'g, G> {
    type State = ProofState<'g>;

    fn first(&mut self) -> bool {
        self.cursor = Cursor::At(0);
        !self.done()
    }

    #[track_caller]
    fn next(&mut self) -> bool {
        match self.cursor {
            Cursor::NotStarted => panic!("next() called before first()"),
            Cursor::At(index) => {
                self.cursor = Cursor::At((index + 1).min(self.successors.len()));
            }
        }
        !self.done()
    }

    fn done(&self) -> bool {
        matches!(self.cursor, Cursor::At(index) if index >= self.successors.len())
    }

    #[track_caller]
    fn dst(&self) -> ProofState<'g> {
        let v = self.current_or_panic("dst");
        self.state_of(v)
    }

    #[track_caller]
    fn cond(&self) -> Cond {
        Cond::successor(self.current_or_panic("cond"))
    }

    #[track_caller]
    fn acc(&self) -> Mark {
        self.current_or_panic("acc");
        self.all_sets
    }

    fn transition(&self) -> Option<Transition<ProofState<'g>>> {
        self.current().map(|v| Transition {
            dst: self.state_of(v),
            cond: Cond::successor(v),
            acc: self.all_sets,
        })
    }
}

/// The iterator [`crate::FairProofAutomaton::succ_iter`] hands out.
pub enum ProofAutomatonIter<'g, G: ?Sized> {
    Ghost(ProofGhostSuccIter<'g>),
    Proof(ProofSuccIter<'g, G>),
}

impl<'g, G: ProofGraph + ?Sized> ProofAutomatonIter<'g, G> {
    /// The state whose successors are enumerated.
    pub fn source(&self) -> AutomatonState<'g> {
        match self {
            Self::Ghost(_) => AutomatonState::ghost(),
            Self::Proof(iter) => AutomatonState::Proof(iter.source()),
        }
    }
}

impl<'g, G: ProofGraph + ?Sized> SuccIterator for ProofAutomatonIter<'g, G> {
    type State = AutomatonState<'g>;

    fn first(&mut self) -> bool {
        match self {
            Self::Ghost(iter) => iter.first(),
            Self::Proof(iter) => iter.first(),
        }
    }

    #[track_caller]
    fn next(&mut self) -> bool {
        match self {
            Self::Ghost(iter) => iter.next(),
            Self::Proof(iter) => iter.next(),
        }
    }

    fn done(&self) -> bool {
        match self {
            Self::Ghost(iter) => iter.done(),
            Self::Proof(iter) => iter.done(),
        }
    }

    #[track_caller]
    fn dst(&self) -> AutomatonState<'g> {
        match self {
            Self::Ghost(iter) => iter.dst().into(),
            Self::Proof(iter) => iter.dst().into(),
        }
    }

    #[track_caller]
    fn cond(&self) -> Cond {
        match self {
            Self::Ghost(iter) => iter.cond(),
            Self::Proof(iter) => iter.cond(),
        }
    }

    #[track_caller]
    fn acc(&self) -> Mark {
        match self {
            Self::Ghost(iter) => iter.acc(),
            Self::Proof(iter) => iter.acc(),
        }
    }

    fn transition(&self) -> Option<Transition<AutomatonState<'g>>> {
        let t = match self {
            Self::Ghost(iter) => iter.transition(),
            Self::Proof(iter) => iter.transition(),
        }?;
        Some(Transition {
            dst: t.dst.into(),
            cond: t.cond,
            acc: t.acc,
        })
    }
}
