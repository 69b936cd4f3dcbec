//! Candidate moves and the fixed move catalogs.
//!
//! Moves are pure displacements: a catalog entry says nothing about whether
//! it is playable in a given position. Bounds, blocking and king safety are
//! resolved by [`Position`](crate::Position).

use std::fmt;

use crate::piece::Piece;

/// A displacement of `dx` ranks and `dy` files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delta {
    pub dx: i8,
    pub dy: i8,
}

impl Delta {
    #[inline]
    pub const fn new(dx: i8, dy: i8) -> Delta {
        Delta { dx, dy }
    }
}

/// The eight king steps in compass order: up, then clockwise.
pub const KING_STEPS: [Delta; 8] = [
    Delta::new(1, 0),
    Delta::new(1, 1),
    Delta::new(0, 1),
    Delta::new(-1, 1),
    Delta::new(-1, 0),
    Delta::new(-1, -1),
    Delta::new(0, -1),
    Delta::new(1, -1),
];

/// Longest possible rook slide.
const MAX_SLIDE: i8 = 7;

/// A candidate move for one of the three pieces.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    WhiteKingStep(Delta),
    WhiteRookSlide(Delta),
    BlackKingStep(Delta),
}

impl Move {
    /// The piece this move displaces.
    #[inline]
    pub const fn piece(self) -> Piece {
        match self {
            Move::WhiteKingStep(_) => Piece::WhiteKing,
            Move::WhiteRookSlide(_) => Piece::WhiteRook,
            Move::BlackKingStep(_) => Piece::BlackKing,
        }
    }

    /// The displacement applied to the piece.
    #[inline]
    pub const fn delta(self) -> Delta {
        match self {
            Move::WhiteKingStep(d) | Move::WhiteRookSlide(d) | Move::BlackKingStep(d) => d,
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Delta { dx, dy } = self.delta();
        write!(f, "Move({} {dx:+} {dy:+})", self.piece())
    }
}

/// Every White candidate: 8 king steps, then 28 rook slides.
///
/// Rook slides are distance-major: for each distance 1..=7 the four
/// directions +x, -x, +y, -y.
pub const WHITE_MOVES: [Move; 36] = build_white_moves();

/// Every Black candidate: the 8 king steps.
pub const BLACK_MOVES: [Move; 8] = build_black_moves();

const fn build_white_moves() -> [Move; 36] {
    let mut moves = [Move::WhiteKingStep(Delta::new(0, 0)); 36];
    let mut i = 0;
    while i < KING_STEPS.len() {
        moves[i] = Move::WhiteKingStep(KING_STEPS[i]);
        i += 1;
    }
    let mut distance = 1;
    while distance <= MAX_SLIDE {
        moves[i] = Move::WhiteRookSlide(Delta::new(distance, 0));
        moves[i + 1] = Move::WhiteRookSlide(Delta::new(-distance, 0));
        moves[i + 2] = Move::WhiteRookSlide(Delta::new(0, distance));
        moves[i + 3] = Move::WhiteRookSlide(Delta::new(0, -distance));
        i += 4;
        distance += 1;
    }
    moves
}

const fn build_black_moves() -> [Move; 8] {
    let mut moves = [Move::BlackKingStep(Delta::new(0, 0)); 8];
    let mut i = 0;
    while i < KING_STEPS.len() {
        moves[i] = Move::BlackKingStep(KING_STEPS[i]);
        i += 1;
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_catalog_layout() {
        assert!(WHITE_MOVES[..8].iter().all(|m| m.piece() == Piece::WhiteKing));
        assert!(WHITE_MOVES[8..].iter().all(|m| m.piece() == Piece::WhiteRook));
        assert_eq!(WHITE_MOVES[8], Move::WhiteRookSlide(Delta::new(1, 0)));
        assert_eq!(WHITE_MOVES[11], Move::WhiteRookSlide(Delta::new(0, -1)));
        assert_eq!(WHITE_MOVES[35], Move::WhiteRookSlide(Delta::new(0, -7)));
    }

    #[test]
    fn rook_slides_are_orthogonal() {
        for m in &WHITE_MOVES[8..] {
            let d = m.delta();
            assert!((d.dx == 0) != (d.dy == 0), "{m:?} is not orthogonal");
            assert!(d.dx.abs() <= 7 && d.dy.abs() <= 7);
        }
    }

    #[test]
    fn king_steps_are_distinct_units() {
        for (i, a) in KING_STEPS.iter().enumerate() {
            assert!(a.dx.abs() <= 1 && a.dy.abs() <= 1);
            assert_ne!(*a, Delta::new(0, 0));
            for b in &KING_STEPS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn black_catalog_mirrors_white_king() {
        for (b, w) in BLACK_MOVES.iter().zip(&WHITE_MOVES[..8]) {
            assert_eq!(b.piece(), Piece::BlackKing);
            assert_eq!(b.delta(), w.delta());
        }
    }

    #[test]
    fn compass_starts_up_then_clockwise() {
        assert_eq!(KING_STEPS[0], Delta::new(1, 0));
        assert_eq!(KING_STEPS[2], Delta::new(0, 1));
        assert_eq!(KING_STEPS[4], Delta::new(-1, 0));
        assert_eq!(KING_STEPS[6], Delta::new(0, -1));
    }
}
