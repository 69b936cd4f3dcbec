//! State graph, heuristic and best-first mate search.

pub mod heuristic;
pub mod search;
pub mod solution;
pub mod state;

pub use heuristic::{f_score, heuristic};
pub use search::Searcher;
pub use search::config::{DEFAULT_MAX_GENERATED, SearchConfig};
pub use solution::{Solution, TestCase};
pub use state::{State, StateArena, StateId};
