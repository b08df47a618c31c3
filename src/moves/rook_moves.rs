//! Rook moves: orthogonal rays. Castling is driven from the king's side.

use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::sliding_moves::{slide_attacks, slide_destinations, ORTHOGONAL};

#[inline]
pub fn rook_destinations(board: &Board, from: Square, color: Color) -> Vec<Square> {
    slide_destinations(board, from, color, &ORTHOGONAL)
}

#[inline]
pub fn rook_attacks(board: &Board, from: Square) -> Vec<Square> {
    slide_attacks(board, from, &ORTHOGONAL)
}
