//! Pawn pushes, captures and en passant.
//!
//! Pawn attack squares are only the two forward diagonals and are reported
//! even when a friendly piece stands there, so that defended squares show up
//! in attack scans. Forward pushes never attack.

use crate::game_state::chess_types::{Board, Color, Square};

/// Diagonal squares a pawn of `color` on `from` attacks.
pub fn pawn_attacks(from: Square, color: Color) -> Vec<Square> {
    let dir = color.pawn_direction();
    [-1i8, 1i8]
        .iter()
        .filter_map(|&d_col| from.offset(dir, d_col))
        .collect()
}

/// Pseudo-legal pawn destinations, including the en-passant capture.
pub fn pawn_destinations(
    board: &Board,
    from: Square,
    color: Color,
    en_passant: Option<Square>,
) -> Vec<Square> {
    let mut out = Vec::with_capacity(4);
    let dir = color.pawn_direction();

    if let Some(one_step) = from.offset(dir, 0) {
        if board.is_empty(one_step) {
            out.push(one_step);

            if from.row() == color.pawn_start_row() {
                if let Some(two_step) = one_step.offset(dir, 0) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for target in pawn_attacks(from, color) {
        match board.color_at(target) {
            Some(other) if other != color => out.push(target),
            None if en_passant == Some(target) => out.push(target),
            _ => {}
        }
    }

    out
}

/// Square of the pawn removed by an en-passant capture landing on `to`.
#[inline]
pub fn en_passant_victim(to: Square, mover: Color) -> Option<Square> {
    to.offset(-mover.pawn_direction(), 0)
}

/// Square skipped by a double step from `from` to `to`, if it is one.
pub fn double_step_midpoint(from: Square, to: Square) -> Option<Square> {
    if from.col() == to.col() && from.row().abs_diff(to.row()) == 2 {
        Square::new((from.row() + to.row()) / 2, from.col())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    fn sorted(mut squares: Vec<Square>) -> Vec<Square> {
        squares.sort();
        squares
    }

    #[test]
    fn unmoved_pawn_may_step_once_or_twice() {
        let board = Board::starting_position();
        assert_eq!(
            sorted(pawn_destinations(&board, sq("e2"), Color::White, None)),
            sorted(vec![sq("e3"), sq("e4")])
        );
        assert_eq!(
            sorted(pawn_destinations(&board, sq("d7"), Color::Black, None)),
            sorted(vec![sq("d6"), sq("d5")])
        );
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let mut board = Board::starting_position();
        board.set_piece(sq("e3"), Some(Piece::new(PieceKind::Knight, Color::Black)));
        assert!(pawn_destinations(&board, sq("e2"), Color::White, None).is_empty());

        let mut board = Board::starting_position();
        board.set_piece(sq("e4"), Some(Piece::new(PieceKind::Knight, Color::Black)));
        assert_eq!(pawn_destinations(&board, sq("e2"), Color::White, None), vec![sq("e3")]);
    }

    #[test]
    fn captures_need_an_enemy_or_the_en_passant_target() {
        let mut board = Board::empty();
        board.set_piece(sq("e5"), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set_piece(sq("d6"), Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set_piece(sq("f5"), Some(Piece::new(PieceKind::Pawn, Color::Black)));

        let quiet = pawn_destinations(&board, sq("e5"), Color::White, None);
        assert_eq!(quiet, vec![sq("e6")]);

        let with_ep = pawn_destinations(&board, sq("e5"), Color::White, Some(sq("f6")));
        assert_eq!(sorted(with_ep), sorted(vec![sq("e6"), sq("f6")]));

        // Friendly pieces are still "attacked" so that they count as defended.
        assert!(pawn_attacks(sq("e5"), Color::White).contains(&sq("d6")));
    }

    #[test]
    fn en_passant_geometry() {
        assert_eq!(en_passant_victim(sq("f6"), Color::White), Some(sq("f5")));
        assert_eq!(en_passant_victim(sq("c3"), Color::Black), Some(sq("c4")));
        assert_eq!(double_step_midpoint(sq("e2"), sq("e4")), Some(sq("e3")));
        assert_eq!(double_step_midpoint(sq("e2"), sq("e3")), None);
    }
}
