//! Search inputs and results.

use rookmate_core::Position;

use crate::state::State;

/// A named starting position to solve.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub name: String,
    pub initial: State,
}

impl TestCase {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            initial: State::root(position),
        }
    }
}

/// Outcome of solving one [`TestCase`].
///
/// A failed search carries the initial state alone as its path and
/// `moves == 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Name of the test case.
    pub name: String,
    /// States from the initial position to the mate, inclusive.
    pub path: Vec<State>,
    /// Plies to mate, or 0 when no mate was found.
    pub moves: u32,
    /// Fingerprint of every successor generated, in generation order,
    /// duplicates included.
    pub generated: Vec<u32>,
}

impl Solution {
    pub(crate) fn found(name: String, path: Vec<State>, generated: Vec<u32>) -> Self {
        let moves = path.last().map_or(0, State::cost);
        Self {
            name,
            path,
            moves,
            generated,
        }
    }

    pub(crate) fn not_found(name: String, initial: State, generated: Vec<u32>) -> Self {
        Self {
            name,
            path: vec![initial],
            moves: 0,
            generated,
        }
    }

    /// `true` if a mating line was found.
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.moves > 0
    }
}
