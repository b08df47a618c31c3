//! Knight jumps.

use crate::game_state::chess_types::{Board, Color, Square};

pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Every on-board jump target, occupied or not.
pub fn knight_attacks(from: Square) -> Vec<Square> {
    KNIGHT_JUMPS
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .collect()
}

pub fn knight_destinations(board: &Board, from: Square, color: Color) -> Vec<Square> {
    knight_attacks(from)
        .into_iter()
        .filter(|&to| board.color_at(to) != Some(color))
        .collect()
}
