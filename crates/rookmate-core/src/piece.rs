//! The three pieces of the King-and-Rook-versus-King endgame.

use std::fmt;

/// One of the three pieces on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    WhiteKing = 0,
    WhiteRook = 1,
    BlackKing = 2,
}

impl Piece {
    /// Total number of pieces.
    pub const COUNT: usize = 3;

    /// All pieces in index order.
    pub const ALL: [Piece; 3] = [Piece::WhiteKing, Piece::WhiteRook, Piece::BlackKing];

    /// Return the index (0..2).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Two-character board text code.
    #[inline]
    pub const fn code(self) -> &'static str {
        match self {
            Piece::WhiteKing => "WK",
            Piece::WhiteRook => "WR",
            Piece::BlackKing => "BK",
        }
    }

    /// Parse a board text code. Returns `None` for the empty-square marker
    /// and for anything unrecognized.
    #[inline]
    pub fn from_code(code: &str) -> Option<Piece> {
        match code {
            "WK" => Some(Piece::WhiteKing),
            "WR" => Some(Piece::WhiteRook),
            "BK" => Some(Piece::BlackKing),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
