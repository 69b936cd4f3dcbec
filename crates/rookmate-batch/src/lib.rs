//! Batch front end: test case files in, solution reports out.

pub mod cases;
pub mod error;
pub mod report;
pub mod runner;

pub use cases::parse_cases;
pub use error::BatchError;
pub use report::{Report, render, render_all};
pub use runner::{BatchOptions, BatchSummary, run};
