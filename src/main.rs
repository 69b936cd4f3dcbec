use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use rookmate_batch::{BatchOptions, run};
use rookmate_engine::{DEFAULT_MAX_GENERATED, SearchConfig};

/// Find short King-and-Rook checkmates for every test case in a file.
#[derive(Parser)]
#[command(name = "rookmate", version, long_about = None)]
struct Cli {
    /// Test case file.
    input: PathBuf,

    /// Report file to write.
    output: PathBuf,

    /// Also print every solution to stdout.
    #[arg(short, long, visible_alias = "v")]
    verbose: bool,

    /// Give up on a case after generating this many states.
    #[arg(long, default_value_t = DEFAULT_MAX_GENERATED)]
    max_states: usize,

    /// Worker threads for solving cases in parallel.
    #[arg(short, long, default_value_t = 1)]
    jobs: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();
    info!(input = %cli.input.display(), "rookmate starting");

    let options = BatchOptions {
        input: cli.input,
        output: cli.output,
        echo: cli.verbose,
        jobs: cli.jobs,
        search: SearchConfig::default().with_max_generated(cli.max_states),
    };
    // A failed report write is logged by the runner and is not fatal.
    run(&options).context("could not load test cases")?;
    Ok(())
}
