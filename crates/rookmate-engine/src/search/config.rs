//! Search limits.

/// Default cap on generated successor states.
pub const DEFAULT_MAX_GENERATED: usize = 10_000;

/// Limits applied to each search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Give up once this many successors have been generated. Checked after
    /// each expansion, so the final count may exceed it by up to one batch.
    pub max_generated: usize,
}

impl SearchConfig {
    pub fn with_max_generated(mut self, max_generated: usize) -> Self {
        self.max_generated = max_generated;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_generated: DEFAULT_MAX_GENERATED,
        }
    }
}
