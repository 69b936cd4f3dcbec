//! Solving many test cases across worker threads.

use std::panic;

use tracing::debug;

use crate::search::Searcher;
use crate::solution::{Solution, TestCase};

impl Searcher {
    /// Solve every case, returning solutions in input order.
    ///
    /// With `jobs > 1` the cases are split into contiguous chunks, one per
    /// scoped worker thread. Each search owns all of its state, so workers
    /// share nothing but the read-only cases and config.
    pub fn solve_all(&self, cases: &[TestCase], jobs: usize) -> Vec<Solution> {
        let jobs = jobs.clamp(1, cases.len().max(1));
        if jobs == 1 {
            return cases.iter().map(|case| self.solve(case)).collect();
        }

        let chunk_len = cases.len().div_ceil(jobs);
        debug!(cases = cases.len(), jobs, chunk_len, "solving in parallel");

        std::thread::scope(|s| {
            let handles: Vec<_> = cases
                .chunks(chunk_len)
                .map(|chunk| {
                    s.spawn(move || chunk.iter().map(|case| self.solve(case)).collect::<Vec<_>>())
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                .collect()
        })
    }
}
