//! Human-readable rendering of solutions.

use std::fmt;

use rookmate_engine::Solution;

/// Generated fingerprints printed per line.
const FINGERPRINTS_PER_LINE: usize = 7;

/// Display adapter for a [`Solution`].
///
/// An unsolved case renders as its name and `NA`. A solved case lists the
/// move count, the number of generated states, each position on the path
/// with its fingerprint, and finally every generated fingerprint.
pub struct Report<'a>(pub &'a Solution);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let solution = self.0;
        if !solution.is_solved() {
            return write!(f, "{}\nNA", solution.name);
        }

        writeln!(f, "{}", solution.name)?;
        writeln!(f, "Moves to solution: {}", solution.moves)?;
        writeln!(f, "Generated states: {}", solution.generated.len())?;
        for (i, state) in solution.path.iter().enumerate() {
            writeln!(f, "{i} ({}):\n{}", state.fingerprint(), state.position())?;
        }

        write!(f, "\nAll Generated States:\n")?;
        for (i, fingerprint) in solution.generated.iter().enumerate() {
            write!(f, "{fingerprint} ")?;
            if (i + 1) % FINGERPRINTS_PER_LINE == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Render one solution.
pub fn render(solution: &Solution) -> String {
    Report(solution).to_string()
}

/// Render a batch: every solution followed by a blank line.
pub fn render_all(solutions: &[Solution]) -> String {
    solutions
        .iter()
        .map(|s| format!("{}\n\n", Report(s)))
        .collect()
}
