//! King steps and castling.
//!
//! Castling is permitted when the king and the rook have never moved, every
//! square between them is empty, the king is not in check, and the squares
//! the king crosses and lands on are not attacked.

use crate::game_state::chess_types::{Board, CastleSide, Color, Square};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::sliding_moves::ALL_DIRECTIONS;

/// The eight neighbouring squares, occupied or not.
pub fn king_attacks(from: Square) -> Vec<Square> {
    ALL_DIRECTIONS
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .collect()
}

/// Neighbouring steps plus whichever castling moves are currently allowed.
pub fn king_destinations(board: &Board, from: Square, color: Color) -> Vec<Square> {
    let mut out: Vec<Square> = king_attacks(from)
        .into_iter()
        .filter(|&to| board.color_at(to) != Some(color))
        .collect();

    out.extend(castling_moves(board, from, color).into_iter().map(|(_, to)| to));
    out
}

/// Allowed castling moves as `(side, king destination)`.
pub fn castling_moves(board: &Board, from: Square, color: Color) -> Vec<(CastleSide, Square)> {
    let mut out = Vec::with_capacity(2);
    let home = color.home_row();
    if Square::new(home, 4) != Some(from) {
        return out;
    }

    let enemy = color.opposite();
    if is_square_attacked(board, from, enemy) {
        return out;
    }

    for side in CastleSide::BOTH {
        if !board.has_castling_right(color, side) {
            continue;
        }

        let rook_col = side.rook_col();
        let (low, high) = if rook_col < 4 { (rook_col + 1, 4) } else { (5, rook_col) };
        let path_clear = (low..high)
            .filter_map(|col| Square::new(home, col))
            .all(|square| board.is_empty(square));
        if !path_clear {
            continue;
        }

        let crossed = Square::new(home, side.rook_target_col());
        let landing = Square::new(home, side.king_target_col());
        let (Some(crossed), Some(landing)) = (crossed, landing) else {
            continue;
        };

        if is_square_attacked(board, crossed, enemy) || is_square_attacked(board, landing, enemy) {
            continue;
        }

        out.push((side, landing));
    }

    out
}
