//! Piece placement and the rule engine.

use crate::chess_move::Move;
use crate::coord::Coord;
use crate::piece::Piece;

/// Where the three pieces stand. Immutable; moves produce new positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Square of each piece, indexed by [`Piece::index()`].
    squares: [Coord; Piece::COUNT],
}

impl Position {
    /// Create a position from the three piece squares.
    #[inline]
    pub const fn new(white_king: Coord, white_rook: Coord, black_king: Coord) -> Position {
        Position {
            squares: [white_king, white_rook, black_king],
        }
    }

    /// Return the square of the given piece.
    #[inline]
    pub const fn square(&self, piece: Piece) -> Coord {
        self.squares[piece.index()]
    }

    #[inline]
    pub const fn white_king(&self) -> Coord {
        self.square(Piece::WhiteKing)
    }

    #[inline]
    pub const fn white_rook(&self) -> Coord {
        self.square(Piece::WhiteRook)
    }

    #[inline]
    pub const fn black_king(&self) -> Coord {
        self.square(Piece::BlackKing)
    }

    /// Return the piece on `sq`, if any.
    pub fn piece_on(&self, sq: Coord) -> Option<Piece> {
        Piece::ALL.into_iter().find(|&p| self.square(p) == sq)
    }

    /// Canonical key: the six coordinates as decimal digits, in the order
    /// WK rank, WK file, WR rank, WR file, BK rank, BK file.
    ///
    /// Every coordinate is a single digit in `1..=8`, so distinct placements
    /// always yield distinct keys.
    pub fn fingerprint(&self) -> u32 {
        self.squares.iter().fold(0, |acc, sq| {
            (acc * 10 + u32::from(sq.x())) * 10 + u32::from(sq.y())
        })
    }

    /// Destination of `mv`, or `None` if it would leave the board.
    #[inline]
    pub fn destination(&self, mv: Move) -> Option<Coord> {
        let delta = mv.delta();
        self.square(mv.piece()).offset(delta.dx, delta.dy)
    }

    /// Return the position with `piece` relocated to `to`. No legality checks.
    #[inline]
    pub fn with_piece_at(&self, piece: Piece, to: Coord) -> Position {
        let mut squares = self.squares;
        squares[piece.index()] = to;
        Position { squares }
    }

    /// Apply `mv` if it is legal here.
    ///
    /// Legality covers the board edge, kings touching, the White king
    /// stepping onto its own rook, and rook slides that would pass through
    /// or land on either king.
    pub fn play(&self, mv: Move) -> Option<Position> {
        let to = self.destination(mv)?;
        match mv {
            Move::WhiteKingStep(_) => {
                if to.touches(self.black_king()) || to == self.white_rook() {
                    return None;
                }
            }
            Move::BlackKingStep(_) => {
                if to.touches(self.white_king()) {
                    return None;
                }
            }
            Move::WhiteRookSlide(_) => {
                if self.slide_blocked(to) {
                    return None;
                }
            }
        }
        Some(self.with_piece_at(mv.piece(), to))
    }

    /// `true` if `mv` can be played here.
    #[inline]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.play(mv).is_some()
    }

    /// `true` if a king stands on the rook's line to `to`, endpoints included.
    ///
    /// The scan runs over both axes: the ranks between the rook and `to` on
    /// the rook's file, and the files between them on the rook's rank. For an
    /// orthogonal slide one of the two ranges collapses to the rook's own
    /// square, which no king can occupy.
    fn slide_blocked(&self, to: Coord) -> bool {
        let rook = self.white_rook();
        let kings = [self.white_king(), self.black_king()];

        let (lo, hi) = (rook.x().min(to.x()), rook.x().max(to.x()));
        let on_file = (lo..=hi).any(|x| kings.iter().any(|k| k.x() == x && k.y() == rook.y()));

        let (lo, hi) = (rook.y().min(to.y()), rook.y().max(to.y()));
        let on_rank = (lo..=hi).any(|y| kings.iter().any(|k| k.y() == y && k.x() == rook.x()));

        on_file || on_rank
    }

    /// `true` if the Black king could take the rook: it touches the rook and
    /// the White king does not.
    pub fn is_rook_en_prise(&self) -> bool {
        let rook = self.white_rook();
        rook.touches(self.black_king()) && !rook.touches(self.white_king())
    }

    /// `true` if the rook attacks the Black king.
    ///
    /// Rook and king must share a rank or file, and the White king must not
    /// stand strictly between them on that line.
    pub fn is_black_in_check(&self) -> bool {
        let (wk, wr, bk) = (self.white_king(), self.white_rook(), self.black_king());

        if wr.x() == bk.x() {
            !(wk.x() == wr.x() && strictly_between(wr.y(), wk.y(), bk.y()))
        } else if wr.y() == bk.y() {
            !(wk.y() == wr.y() && strictly_between(wr.x(), wk.x(), bk.x()))
        } else {
            false
        }
    }
}

/// `true` if `mid` lies strictly between `a` and `b`.
#[inline]
fn strictly_between(a: u8, mid: u8, b: u8) -> bool {
    (a < mid && mid < b) || (b < mid && mid < a)
}
