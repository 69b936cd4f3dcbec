//! Read a test case file, solve every case, write the report.

use std::fs;
use std::path::PathBuf;

use tracing::{error, info};

use rookmate_engine::{SearchConfig, Searcher, Solution};

use crate::cases::parse_cases;
use crate::error::BatchError;
use crate::report::render_all;

/// Settings for one batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Test case file to read.
    pub input: PathBuf,
    /// Report file to write.
    pub output: PathBuf,
    /// Also print the report to stdout.
    pub echo: bool,
    /// Worker threads used to solve cases.
    pub jobs: usize,
    /// Limits for each search.
    pub search: SearchConfig,
}

impl BatchOptions {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            echo: false,
            jobs: 1,
            search: SearchConfig::default(),
        }
    }
}

/// What a batch run produced.
#[derive(Debug)]
pub struct BatchSummary {
    /// One solution per test case, in input order.
    pub solutions: Vec<Solution>,
    /// Set when the report file could not be written.
    pub write_error: Option<BatchError>,
}

impl BatchSummary {
    /// Number of cases for which a mate was found.
    pub fn solved(&self) -> usize {
        self.solutions.iter().filter(|s| s.is_solved()).count()
    }
}

/// Run a batch.
///
/// Fails only if the input cannot be read or parsed. A report that cannot
/// be written is logged and returned in [`BatchSummary::write_error`]; the
/// console echo still happens.
pub fn run(options: &BatchOptions) -> Result<BatchSummary, BatchError> {
    let text = fs::read_to_string(&options.input).map_err(|source| BatchError::ReadInput {
        path: options.input.clone(),
        source,
    })?;
    let cases = parse_cases(&text)?;
    info!(cases = cases.len(), input = %options.input.display(), "test cases loaded");

    let searcher = Searcher::new(options.search);
    let solutions = searcher.solve_all(&cases, options.jobs);

    let report = render_all(&solutions);
    let write_error = fs::write(&options.output, &report)
        .map_err(|source| BatchError::WriteOutput {
            path: options.output.clone(),
            source,
        })
        .err();
    if let Some(ref e) = write_error {
        error!(error = %e, "report not written");
    }

    if options.echo {
        print!("{report}");
    }

    let summary = BatchSummary {
        solutions,
        write_error,
    };
    info!(
        solved = summary.solved(),
        total = summary.solutions.len(),
        "batch finished"
    );
    Ok(summary)
}
