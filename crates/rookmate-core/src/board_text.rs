//! Board text parsing and rendering for [`Position`].
//!
//! The grid lists rank 8 first and file 1 first within a rank. Cells are
//! `WK`, `WR`, `BK` or `--`.

use std::fmt;
use std::str::FromStr;

use crate::coord::Coord;
use crate::error::ParseError;
use crate::piece::Piece;
use crate::position::Position;

/// Marker for an empty square.
pub const EMPTY_CELL: &str = "--";

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Position, ParseError> {
        let cells: Vec<&str> = text.split_whitespace().collect();
        if cells.len() != 64 {
            return Err(ParseError::WrongCount { found: cells.len() });
        }

        let mut squares: [Option<Coord>; Piece::COUNT] = [None; Piece::COUNT];
        let board_order = (Coord::MIN..=Coord::MAX)
            .rev()
            .flat_map(|x| (Coord::MIN..=Coord::MAX).filter_map(move |y| Coord::new(x, y)));

        for (cell, sq) in cells.into_iter().zip(board_order) {
            if cell == EMPTY_CELL {
                continue;
            }
            let piece = Piece::from_code(cell).ok_or_else(|| ParseError::UnknownToken {
                token: cell.to_string(),
            })?;
            let slot = &mut squares[piece.index()];
            if slot.is_some() {
                return Err(ParseError::DuplicatePiece { piece });
            }
            *slot = Some(sq);
        }

        let find = |piece: Piece| squares[piece.index()].ok_or(ParseError::MissingToken { piece });
        Ok(Position::new(
            find(Piece::WhiteKing)?,
            find(Piece::WhiteRook)?,
            find(Piece::BlackKing)?,
        ))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in (Coord::MIN..=Coord::MAX).rev() {
            for y in Coord::MIN..=Coord::MAX {
                if y > Coord::MIN {
                    f.write_str(" ")?;
                }
                let cell = Coord::new(x, y)
                    .and_then(|sq| self.piece_on(sq))
                    .map_or(EMPTY_CELL, Piece::code);
                f.write_str(cell)?;
            }
            if x > Coord::MIN {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
