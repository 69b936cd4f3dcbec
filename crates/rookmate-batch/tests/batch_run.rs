//! End-to-end batch runs against files in the system temp directory.

use std::fs;
use std::path::PathBuf;

use rookmate_batch::{BatchError, BatchOptions, run};
use rookmate_engine::SearchConfig;

const INPUT: &str = "\
3
Mate in one
BK -- -- -- -- -- -- --
-- -- -- -- -- -- -- --
-- WK -- -- -- -- -- --
-- -- -- -- -- -- -- --
-- -- -- -- -- -- -- --
-- -- -- -- -- -- -- --
-- -- -- -- -- -- -- --
-- -- -- -- -- -- -- WR

Corner
BK -- -- -- -- -- -- --
WR -- -- -- -- -- -- --
-- -- -- -- -- -- -- --
-- -- -- -- -- -- -- --
-- -- -- -- -- -- -- --
-- -- -- -- -- -- -- --
-- -- -- -- -- -- -- --
WK -- -- -- -- -- -- --

Centre
-- -- -- -- -- -- -- --
-- -- -- -- -- -- -- --
-- -- -- -- -- -- -- --
-- -- -- -- BK -- -- --
-- -- -- -- -- -- -- --
-- -- -- -- -- -- -- --
-- -- -- -- -- -- -- --
WK -- -- -- -- -- -- WR
";

/// A fresh scratch directory unique to this test.
fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rookmate-{}-{test}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn solves_and_writes_report() {
    let dir = scratch_dir("report");
    let input = dir.join("cases.txt");
    let output = dir.join("solutions.txt");
    fs::write(&input, INPUT).unwrap();

    let summary = run(&BatchOptions::new(&input, &output)).unwrap();
    assert!(summary.write_error.is_none());
    assert_eq!(summary.solutions.len(), 3);
    assert_eq!(summary.solved(), 3);

    let moves: Vec<u32> = summary.solutions.iter().map(|s| s.moves).collect();
    assert_eq!(moves, [1, 7, 8]);

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.starts_with("Mate in one\nMoves to solution: 1\nGenerated states: 20\n"));
    assert!(report.contains("Corner\nMoves to solution: 7\n"));
    assert!(report.contains("Centre\nMoves to solution: 8\n"));
    assert!(report.ends_with("\n\n"));
}

#[test]
fn capped_cases_report_na() {
    let dir = scratch_dir("capped");
    let input = dir.join("cases.txt");
    let output = dir.join("solutions.txt");
    fs::write(&input, INPUT).unwrap();

    let mut options = BatchOptions::new(&input, &output);
    options.search = SearchConfig::default().with_max_generated(50);
    let summary = run(&options).unwrap();
    assert_eq!(summary.solved(), 1);

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("Corner\nNA\n\n"));
    assert!(report.ends_with("Centre\nNA\n\n"));
}

#[test]
fn parallel_run_keeps_input_order() {
    let dir = scratch_dir("parallel");
    let input = dir.join("cases.txt");
    fs::write(&input, INPUT).unwrap();

    let sequential = run(&BatchOptions::new(&input, dir.join("seq.txt"))).unwrap();
    let mut options = BatchOptions::new(&input, dir.join("par.txt"));
    options.jobs = 3;
    let parallel = run(&options).unwrap();

    assert_eq!(sequential.solutions, parallel.solutions);
    assert_eq!(
        fs::read_to_string(dir.join("seq.txt")).unwrap(),
        fs::read_to_string(dir.join("par.txt")).unwrap()
    );
}

#[test]
fn missing_input_is_an_error() {
    let dir = scratch_dir("missing");
    let result = run(&BatchOptions::new(dir.join("absent.txt"), dir.join("out.txt")));
    assert!(matches!(result, Err(BatchError::ReadInput { .. })));
    assert!(!dir.join("out.txt").exists());
}

#[test]
fn unwritable_output_still_returns_solutions() {
    let dir = scratch_dir("unwritable");
    let input = dir.join("cases.txt");
    fs::write(&input, INPUT).unwrap();

    // A directory cannot be written as a file.
    let options = BatchOptions::new(&input, &dir);
    let summary = run(&options).unwrap();
    assert!(matches!(
        summary.write_error,
        Some(BatchError::WriteOutput { .. })
    ));
    assert_eq!(summary.solutions.len(), 3);
}
