//! Distance-to-mate estimate guiding the search.
//!
//! Mate needs the Black king on an edge, and the White king has to come
//! close to it. The estimate adds the Black king's distance to the nearest
//! edge to the distance between the kings, less one because the kings can
//! never stand adjacent. It is a guide only; it can overestimate.

use crate::state::State;

/// Estimated plies to mate from `state`; `0.0` for a terminal state.
pub fn heuristic(state: &State) -> f64 {
    if state.is_terminal() {
        return 0.0;
    }
    let position = state.position();
    let bk = position.black_king();
    f64::from(bk.edge_distance()) + bk.euclidean(position.white_king()) - 1.0
}

/// Priority of `state` in the open list: cost so far plus the estimate.
#[inline]
pub fn f_score(state: &State) -> f64 {
    f64::from(state.cost()) + heuristic(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateArena;
    use rookmate_core::{Coord, Position};

    fn root(wk: &str, wr: &str, bk: &str) -> State {
        let sq = |s: &str| Coord::from_algebraic(s).unwrap();
        State::root(Position::new(sq(wk), sq(wr), sq(bk)))
    }

    #[test]
    fn edge_and_king_distance() {
        // Black king on the edge, kings two files apart.
        assert_eq!(heuristic(&root("c6", "h1", "a6")), 1.0);
        // e5 is three steps from every edge; kings (4, 4) apart.
        let h = heuristic(&root("a1", "h1", "e5"));
        assert!((h - (3.0 + 32f64.sqrt() - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn root_f_score_equals_heuristic() {
        let s = root("a1", "h1", "e5");
        assert_eq!(f_score(&s), heuristic(&s));
    }

    #[test]
    fn terminal_is_zero() {
        let mut arena = StateArena::new();
        let id = arena.push(root("b6", "h1", "a8"));
        let mate = arena[id]
            .successors(id)
            .into_iter()
            .find(State::is_terminal)
            .unwrap();
        assert_eq!(heuristic(&mate), 0.0);
        assert_eq!(f_score(&mate), 1.0);
    }
}
