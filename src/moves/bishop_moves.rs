//! Bishop moves: diagonal rays.

use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::sliding_moves::{slide_attacks, slide_destinations, DIAGONAL};

#[inline]
pub fn bishop_destinations(board: &Board, from: Square, color: Color) -> Vec<Square> {
    slide_destinations(board, from, color, &DIAGONAL)
}

#[inline]
pub fn bishop_attacks(board: &Board, from: Square) -> Vec<Square> {
    slide_attacks(board, from, &DIAGONAL)
}
