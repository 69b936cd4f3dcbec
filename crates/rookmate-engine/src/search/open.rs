//! Open-list entries ordered for a min-heap on `f = cost + heuristic`.

use std::cmp::Ordering;

use crate::heuristic::f_score;
use crate::state::{State, StateId};

/// A queued state. Lower `f` pops first; among equal `f`, the earlier
/// insertion pops first.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OpenEntry {
    f: f64,
    seq: u64,
    pub(crate) id: StateId,
}

impl OpenEntry {
    pub(crate) fn new(state: &State, id: StateId, seq: u64) -> Self {
        Self {
            f: f_score(state),
            seq,
            id,
        }
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    // Reversed so `BinaryHeap` behaves as a min-heap.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
