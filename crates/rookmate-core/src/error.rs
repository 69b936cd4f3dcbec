//! Error types for board text parsing.

use crate::piece::Piece;

/// Errors that occur when parsing an 8x8 board text grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The grid does not hold exactly 64 whitespace-separated cells.
    #[error("expected 64 board cells, found {found}")]
    WrongCount {
        /// Number of cells found.
        found: usize,
    },
    /// One of the three pieces never appears on the grid.
    #[error("missing {piece} on board")]
    MissingToken {
        /// The absent piece.
        piece: Piece,
    },
    /// A cell is neither a piece code nor the empty marker.
    #[error("invalid board cell: \"{token}\"")]
    UnknownToken {
        /// The unrecognized cell text.
        token: String,
    },
    /// A piece appears on more than one square.
    #[error("{piece} appears more than once")]
    DuplicatePiece {
        /// The repeated piece.
        piece: Piece,
    },
}

#[cfg(test)]
mod tests {
    use super::ParseError;
    use crate::piece::Piece;

    #[test]
    fn parse_error_display() {
        let err = ParseError::WrongCount { found: 63 };
        assert_eq!(format!("{err}"), "expected 64 board cells, found 63");
        let err = ParseError::MissingToken {
            piece: Piece::BlackKing,
        };
        assert_eq!(format!("{err}"), "missing BK on board");
    }
}
