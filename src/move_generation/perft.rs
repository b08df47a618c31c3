//! Perft node counting.
//!
//! Walks the full legal move tree to a fixed depth and tallies leaf nodes by
//! move type. Promotions are expanded to all four replacement pieces so the
//! totals line up with published reference counts.

use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::BoardMove;
use crate::move_generation::legal_move_apply::{en_passant_target_after, make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{has_legal_moves, legal_move_list};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

/// Perft from the current position of `game_state`.
pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    let mut board = game_state.board().clone();
    perft_board(&mut board, game_state.turn(), game_state.en_passant_target(), depth)
}

/// Perft over a bare board; `board` is unchanged on return.
pub fn perft_board(board: &mut Board, color: Color, en_passant: Option<Square>, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    perft_recurse(board, color, en_passant, depth, &mut counts);
    counts
}

fn perft_recurse(
    board: &mut Board,
    color: Color,
    en_passant: Option<Square>,
    depth: u8,
    counts: &mut PerftCounts,
) {
    for mv in legal_move_list(board, color, en_passant) {
        let candidates: Vec<BoardMove> = if mv.is_promotion() {
            PROMOTION_CHOICES
                .iter()
                .map(|&kind| BoardMove::with_promotion(mv.from, mv.to, kind))
                .collect()
        } else {
            vec![BoardMove::new(mv.from, mv.to)]
        };

        for candidate in candidates {
            let Some(undo) = make_move(board, candidate, en_passant) else {
                continue;
            };

            if depth == 1 {
                counts.nodes += 1;
                if undo.captured.is_some() {
                    counts.captures += 1;
                }
                if undo.is_en_passant() {
                    counts.en_passant += 1;
                }
                if undo.castle_side.is_some() {
                    counts.castles += 1;
                }
                if undo.promoted_to.is_some() {
                    counts.promotions += 1;
                }
                let next_ep = en_passant_target_after(&undo);
                if is_in_check(board, color.opposite()) {
                    counts.checks += 1;
                    if !has_legal_moves(board, color.opposite(), next_ep) {
                        counts.checkmates += 1;
                    }
                }
            } else {
                let next_ep = en_passant_target_after(&undo);
                perft_recurse(board, color.opposite(), next_ep, depth - 1, counts);
            }

            unmake_move(board, &undo);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const ENDGAME: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    #[test]
    fn start_position_reference_counts() {
        let game = GameState::new();
        assert_eq!(perft(&game, 1).nodes, 20);
        assert_eq!(perft(&game, 2).nodes, 400);

        let depth3 = perft(&game, 3);
        assert_eq!(depth3.nodes, 8902);
        assert_eq!(depth3.captures, 34);
        assert_eq!(depth3.checks, 12);
        assert_eq!(depth3.checkmates, 0);
    }

    #[test]
    fn kiwipete_reference_counts() {
        let game = parse_fen(KIWIPETE).expect("FEN should parse");
        let depth1 = perft(&game, 1);
        assert_eq!(depth1.nodes, 48);
        assert_eq!(depth1.captures, 8);
        assert_eq!(depth1.castles, 2);

        let depth2 = perft(&game, 2);
        assert_eq!(depth2.nodes, 2039);
        assert_eq!(depth2.captures, 351);
        assert_eq!(depth2.en_passant, 1);
        assert_eq!(depth2.castles, 91);
    }

    #[test]
    fn endgame_reference_counts() {
        let game = parse_fen(ENDGAME).expect("FEN should parse");
        assert_eq!(perft(&game, 1).nodes, 14);
        assert_eq!(perft(&game, 2).nodes, 191);
        assert_eq!(perft(&game, 3).nodes, 2812);
    }

    #[test]
    fn promotion_race_breakdown() {
        let game = parse_fen("r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1")
            .expect("FEN should parse");
        assert_eq!(perft(&game, 1).nodes, 6);
        assert_eq!(
            perft(&game, 2),
            PerftCounts {
                nodes: 264,
                captures: 87,
                en_passant: 0,
                castles: 6,
                promotions: 48,
                checks: 10,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn perft_leaves_board_untouched() {
        let game = parse_fen(KIWIPETE).expect("FEN should parse");
        let mut board = game.board().clone();
        perft_board(&mut board, Color::White, None, 2);
        assert_eq!(&board, game.board());
        assert_eq!(perft_board(&mut board, Color::White, None, 0).nodes, 1);
    }
}
