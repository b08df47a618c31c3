//! Full legal move generation and the terminal-position predicates built on it.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::move_generator::{LegalMove, LegalMoves};
use crate::moves::piece_rules::valid_destinations;

/// Pseudo-legal destinations of the piece on `from`.
#[inline]
pub fn pseudo_legal_moves(board: &Board, from: Square, en_passant: Option<Square>) -> Vec<Square> {
    valid_destinations(board, from, en_passant)
}

/// Lazy sequence of `color`'s legal moves.
#[inline]
pub fn legal_moves(board: &Board, color: Color, en_passant: Option<Square>) -> LegalMoves {
    LegalMoves::new(board, color, en_passant)
}

/// Legal destinations of the single piece on `from`.
pub fn legal_destinations(board: &Board, from: Square, en_passant: Option<Square>) -> Vec<Square> {
    LegalMoves::from_square(board, from, en_passant)
        .map(|mv| mv.to)
        .collect()
}

/// Materialised list, for callers that need to iterate several times.
pub fn legal_move_list(board: &Board, color: Color, en_passant: Option<Square>) -> Vec<LegalMove> {
    legal_moves(board, color, en_passant).collect()
}

/// Stops at the first legal move found.
#[inline]
pub fn has_legal_moves(board: &Board, color: Color, en_passant: Option<Square>) -> bool {
    legal_moves(board, color, en_passant).next().is_some()
}

pub fn is_checkmate(board: &Board, color: Color, en_passant: Option<Square>) -> bool {
    is_in_check(board, color) && !has_legal_moves(board, color, en_passant)
}

pub fn is_stalemate(board: &Board, color: Color, en_passant: Option<Square>) -> bool {
    !is_in_check(board, color) && !has_legal_moves(board, color, en_passant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::undo_state::BoardMove;
    use crate::move_generation::legal_move_apply::{make_move, unmake_move};
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::fen_parser::parse_fen;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    #[test]
    fn twenty_legal_moves_from_the_start() {
        let board = Board::starting_position();
        assert_eq!(legal_moves(&board, Color::White, None).count(), 20);
        assert_eq!(legal_moves(&board, Color::Black, None).count(), 20);
    }

    #[test]
    fn pinned_piece_may_only_slide_along_the_pin() {
        let game = parse_fen("4k3/4r3/8/8/8/8/4R3/4K3 w - - 0 1").expect("FEN should parse");
        let mut moves = legal_destinations(game.board(), sq("e2"), None);
        moves.sort();
        let mut expected = vec![sq("e3"), sq("e4"), sq("e5"), sq("e6"), sq("e7")];
        expected.sort();
        assert_eq!(moves, expected);
        assert!(pseudo_legal_moves(game.board(), sq("e2"), None).contains(&sq("a2")));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let game = parse_fen("4k3/8/8/8/8/8/r7/4K3 w - - 0 1").expect("FEN should parse");
        let moves = legal_destinations(game.board(), sq("e1"), None);
        assert!(moves.iter().all(|to| to.row() == 7));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn horizontally_pinned_en_passant_is_illegal() {
        let game = parse_fen("8/8/8/K2pP2r/8/8/8/7k w - d6 0 1").expect("FEN should parse");
        let moves = legal_destinations(game.board(), sq("e5"), Some(sq("d6")));
        assert_eq!(moves, vec![sq("e6")]);
    }

    #[test]
    fn checkmate_and_stalemate_are_exclusive() {
        let mate = parse_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN should parse");
        assert!(is_checkmate(mate.board(), Color::Black, None));
        assert!(!is_stalemate(mate.board(), Color::Black, None));

        let stale = parse_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert!(is_stalemate(stale.board(), Color::Black, None));
        assert!(!is_checkmate(stale.board(), Color::Black, None));
        assert!(!has_legal_moves(stale.board(), Color::Black, None));
    }

    #[test]
    fn no_legal_move_leaves_own_king_attacked() {
        let game = parse_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        let mut board = game.board().clone();
        for color in Color::BOTH {
            for mv in legal_move_list(game.board(), color, None) {
                let undo = make_move(&mut board, BoardMove::new(mv.from, mv.to), None)
                    .expect("legal move should apply");
                assert!(!is_in_check(&board, color), "{} leaves the king in check", mv.notation());
                unmake_move(&mut board, &undo);
                assert_eq!(&board, game.board());
            }
        }
    }
}
