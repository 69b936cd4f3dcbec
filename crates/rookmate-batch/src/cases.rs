//! Test case file parsing.
//!
//! ```text
//! 2
//! First case
//! -- -- -- -- -- -- -- BK
//! ... 7 more rows ...
//!
//! Second case
//! ...
//! ```
//!
//! The first line holds the number of cases. Each case is a name line
//! followed by 8 board rows, rank 8 first. Blank lines between cases are
//! ignored.

use rookmate_core::Position;
use rookmate_engine::TestCase;

use crate::error::BatchError;

/// Rows in a board grid.
const BOARD_ROWS: usize = 8;

/// Parse a whole test case file.
pub fn parse_cases(text: &str) -> Result<Vec<TestCase>, BatchError> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    let count_line = lines.next().ok_or(BatchError::MissingCount)?;
    let count: usize = count_line.parse().map_err(|_| BatchError::InvalidCount {
        found: count_line.to_string(),
    })?;

    let mut cases = Vec::new();
    for index in 0..count {
        let name = lines.next().ok_or(BatchError::MissingName { index })?;

        let rows: Vec<&str> = lines.by_ref().take(BOARD_ROWS).collect();
        if rows.len() != BOARD_ROWS {
            return Err(BatchError::TruncatedBoard {
                name: name.to_string(),
                found: rows.len(),
            });
        }

        let position: Position = rows.join("\n").parse().map_err(|source| BatchError::Board {
            name: name.to_string(),
            source,
        })?;
        cases.push(TestCase::new(name, position));
    }

    Ok(cases)
}
