//! Queen moves: union of rook and bishop rays.

use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::sliding_moves::{slide_attacks, slide_destinations, ALL_DIRECTIONS};

#[inline]
pub fn queen_destinations(board: &Board, from: Square, color: Color) -> Vec<Square> {
    slide_destinations(board, from, color, &ALL_DIRECTIONS)
}

#[inline]
pub fn queen_attacks(board: &Board, from: Square) -> Vec<Square> {
    slide_attacks(board, from, &ALL_DIRECTIONS)
}
