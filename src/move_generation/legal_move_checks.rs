use crate::game_state::chess_types::*;
use crate::moves::piece_rules::attack_squares;

/// True iff some piece of `attacker_color` has `square` among its attack squares.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|(from, _)| attack_squares(board, from).contains(&square))
}

/// Every piece of `attacker_color` attacking or defending `square`.
pub fn attackers_to_square(board: &Board, square: Square, attacker_color: Color) -> Vec<(Square, Piece)> {
    board
        .pieces_of(attacker_color)
        .filter(|(from, _)| attack_squares(board, *from).contains(&square))
        .collect()
}

/// `is_square_attacked(king_square(color), opponent(color))`.
///
/// # Panics
/// When `color` has no king on the board.
#[inline]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    is_square_attacked(board, board.king_square(color), color.opposite())
}
