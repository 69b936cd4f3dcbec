//! Batch processing errors.

use std::io;
use std::path::PathBuf;

use rookmate_core::ParseError;

/// Errors that can occur while reading, parsing or writing a batch.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// The input file could not be read.
    #[error("could not read input file {}: {source}", path.display())]
    ReadInput {
        /// Path of the input file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The output file could not be written.
    #[error("could not write output file {}: {source}", path.display())]
    WriteOutput {
        /// Path of the output file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The input holds no test case count.
    #[error("missing test case count")]
    MissingCount,

    /// The test case count is not a non-negative integer.
    #[error("invalid test case count: \"{found}\"")]
    InvalidCount {
        /// The text found where the count was expected.
        found: String,
    },

    /// The input ends before the name line of a test case.
    #[error("missing name for test case {index}")]
    MissingName {
        /// Zero-based index of the test case.
        index: usize,
    },

    /// The input ends before all 8 board rows of a test case.
    #[error("board for \"{name}\" has {found} of 8 rows")]
    TruncatedBoard {
        /// Name of the test case.
        name: String,
        /// Number of rows found.
        found: usize,
    },

    /// A board grid failed to parse.
    #[error("invalid board for \"{name}\": {source}")]
    Board {
        /// Name of the test case.
        name: String,
        /// The underlying parse error.
        source: ParseError,
    },
}
