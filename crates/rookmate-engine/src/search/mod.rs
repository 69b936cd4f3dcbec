//! Best-first mate search.

pub mod config;
pub(crate) mod open;
pub mod pool;

use std::collections::{BinaryHeap, HashSet};

use tracing::{debug, warn};

use config::SearchConfig;
use open::OpenEntry;

use crate::solution::{Solution, TestCase};
use crate::state::StateArena;

/// A* search over the one-ply transition graph.
///
/// States are popped in ascending `cost + heuristic`. A popped state's
/// fingerprint joins the closed set and successors already closed are
/// skipped; duplicates still waiting in the open list are caught when they
/// pop. Every generated successor is logged, and the search gives up once
/// the log reaches [`SearchConfig::max_generated`].
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search for a mate from the test case's initial state.
    pub fn solve(&self, case: &TestCase) -> Solution {
        let max_generated = self.config.max_generated;
        debug!(case = %case.name, max_generated, "search started");

        let mut arena = StateArena::new();
        let mut open = BinaryHeap::new();
        let mut closed: HashSet<u32> = HashSet::new();
        let mut generated: Vec<u32> = Vec::new();
        let mut seq: u64 = 0;

        let root_id = arena.push(case.initial);
        open.push(OpenEntry::new(&case.initial, root_id, seq));

        while let Some(entry) = open.pop() {
            let current = arena[entry.id];
            let newly_closed = closed.insert(current.fingerprint());

            if current.is_terminal() {
                let path = arena.path(entry.id);
                debug!(
                    case = %case.name,
                    moves = current.cost(),
                    generated = generated.len(),
                    expanded = closed.len(),
                    "mate found"
                );
                return Solution::found(case.name.clone(), path, generated);
            }

            if !newly_closed {
                // Reached again through another line; already expanded.
                continue;
            }

            for successor in current.successors(entry.id) {
                let fingerprint = successor.fingerprint();
                generated.push(fingerprint);
                if closed.contains(&fingerprint) {
                    continue;
                }
                let id = arena.push(successor);
                seq += 1;
                open.push(OpenEntry::new(&successor, id, seq));
            }

            if generated.len() >= max_generated {
                warn!(
                    case = %case.name,
                    generated = generated.len(),
                    "generated-state cap reached without mate"
                );
                return Solution::not_found(case.name.clone(), case.initial, generated);
            }
        }

        debug!(case = %case.name, generated = generated.len(), "open list exhausted");
        Solution::not_found(case.name.clone(), case.initial, generated)
    }
}
