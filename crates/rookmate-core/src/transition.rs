//! One ply of play: a White move followed by the defender's greedy reply.

use tracing::trace;

use crate::chess_move::{BLACK_MOVES, Move, WHITE_MOVES};
use crate::position::Position;

/// Result of playing a White move that survives all filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Black answered; the position after Black's reply.
    Reply(Position),
    /// White's move mates; the position right after it.
    Checkmate(Position),
}

impl Transition {
    /// The resulting position, whichever kind of transition this is.
    #[inline]
    pub const fn position(self) -> Position {
        match self {
            Transition::Reply(p) | Transition::Checkmate(p) => p,
        }
    }

    #[inline]
    pub const fn is_checkmate(self) -> bool {
        matches!(self, Transition::Checkmate(_))
    }
}

/// How much the defender dislikes a Black king square; lower is better.
///
/// Weights pull the king towards the centre, rank distance costing more
/// than file distance, with a small bias towards the lower-left.
pub fn defender_score(position: &Position) -> f64 {
    let bk = position.black_king();
    let pull = 5 * u32::from(bk.x().abs_diff(5)) + 3 * u32::from(bk.y().abs_diff(5));
    f64::from(pull) + f64::from(bk.x() + bk.y()) * 0.1
}

impl Position {
    /// Black's reply: the legal, check-free king step with the lowest
    /// [`defender_score`], earliest in compass order on ties.
    pub fn best_black_reply(&self) -> Option<Position> {
        let mut best: Option<(Position, f64)> = None;
        for mv in BLACK_MOVES {
            let Some(next) = self.play(mv) else {
                continue;
            };
            if next.is_black_in_check() {
                continue;
            }
            let score = defender_score(&next);
            if best.is_none_or(|(_, s)| score < s) {
                best = Some((next, score));
            }
        }
        best.map(|(p, _)| p)
    }

    /// Play White's `mv` and let Black answer.
    ///
    /// Returns `None` when the move is illegal, leaves the rook en prise, or
    /// stalemates Black.
    pub fn transition(&self, mv: Move) -> Option<Transition> {
        debug_assert!(!matches!(mv, Move::BlackKingStep(_)), "White to move");

        let after_white = self.play(mv)?;
        if after_white.is_rook_en_prise() {
            return None;
        }

        match after_white.best_black_reply() {
            Some(reply) => Some(Transition::Reply(reply)),
            None if after_white.is_black_in_check() => Some(Transition::Checkmate(after_white)),
            None => {
                trace!(?mv, fingerprint = after_white.fingerprint(), "stalemate rejected");
                None
            }
        }
    }

    /// Every surviving White move in catalog order.
    pub fn transitions(&self) -> impl Iterator<Item = Transition> + '_ {
        WHITE_MOVES
            .into_iter()
            .filter_map(move |mv| self.transition(mv))
    }
}
