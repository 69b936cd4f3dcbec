//! Core types for the King-and-Rook-versus-King endgame: coordinates,
//! pieces, move catalogs, positions and the rules that connect them.

mod board_text;
mod chess_move;
mod coord;
mod error;
mod piece;
mod position;
mod transition;

pub use board_text::EMPTY_CELL;
pub use chess_move::{BLACK_MOVES, Delta, KING_STEPS, Move, WHITE_MOVES};
pub use coord::Coord;
pub use error::ParseError;
pub use piece::Piece;
pub use position::Position;
pub use transition::{Transition, defender_score};
