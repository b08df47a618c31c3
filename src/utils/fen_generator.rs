use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_destinations;
use crate::moves::pawn_moves::en_passant_victim;
use crate::utils::fen_parser::castling_char;

pub fn generate_fen(game_state: &GameState) -> String {
    let side_to_move = match game_state.turn() {
        Color::White => "w",
        Color::Black => "b",
    };
    let en_passant = game_state
        .en_passant_target()
        .map(|square| square.to_string())
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {} {} {}",
        generate_board_field(game_state.board()),
        side_to_move,
        generate_castling_field(game_state.board()),
        en_passant,
        game_state.halfmove_clock(),
        game_state.fullmove_number()
    )
}

/// Key identifying a position for repetition counting.
///
/// Placement, side to move and the castling rights derived from `has_moved`
/// always take part. The en-passant target only does when the side to move
/// can actually capture onto it, so a double step nobody can answer does not
/// make an otherwise repeated position look new.
pub fn canonical_position_key(board: &Board, turn: Color, en_passant: Option<Square>) -> String {
    let side = match turn {
        Color::White => 'w',
        Color::Black => 'b',
    };
    let en_passant = en_passant
        .filter(|&target| en_passant_is_capturable(board, turn, target))
        .map(|square| square.to_string())
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {}",
        generate_board_field(board),
        side,
        generate_castling_field(board),
        en_passant
    )
}

pub(crate) fn generate_board_field(board: &Board) -> String {
    let mut out = String::with_capacity(72);

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            match Square::new(row, col).and_then(|square| board.piece_at(square)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(board: &Board) -> String {
    let mut out = String::with_capacity(4);

    for color in Color::BOTH {
        for side in CastleSide::BOTH {
            if board.has_castling_right(color, side) {
                out.push(castling_char(color, side));
            }
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn en_passant_is_capturable(board: &Board, turn: Color, target: Square) -> bool {
    let Some(victim) = en_passant_victim(target, turn) else {
        return false;
    };

    [-1i8, 1i8]
        .iter()
        .filter_map(|&d_col| victim.offset(0, d_col))
        .filter(|&square| {
            matches!(board.piece_at(square), Some(p) if p.kind == PieceKind::Pawn && p.color == turn)
        })
        .any(|square| legal_destinations(board, square, Some(target)).contains(&target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::fen_parser::parse_fen;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    #[test]
    fn round_trip_starting_position_fen() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        let generated = generate_fen(&parsed);
        assert_eq!(generated, STARTING_POSITION_FEN);

        let reparsed = parse_fen(&generated).expect("generated FEN should parse");
        assert_eq!(reparsed.board(), parsed.board());
        assert_eq!(reparsed.turn(), parsed.turn());
    }

    #[test]
    fn round_trip_custom_position_fen() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6";
        let parsed = parse_fen(fen).expect("custom FEN should parse");
        assert_eq!(generate_fen(&parsed), fen);
        assert!(!parsed.board().has_castling_right(Color::White, CastleSide::KingSide));
        assert!(parsed.board().has_castling_right(Color::Black, CastleSide::QueenSide));
    }

    #[test]
    fn key_ignores_an_uncapturable_en_passant_target() {
        let board = Board::starting_position();
        let mut after_e4 = board.clone();
        let pawn = after_e4.take_piece(sq("e2"));
        after_e4.set_piece(sq("e4"), pawn);

        let with_target = canonical_position_key(&after_e4, Color::Black, Some(sq("e3")));
        let without_target = canonical_position_key(&after_e4, Color::Black, None);
        assert_eq!(with_target, without_target);
    }

    #[test]
    fn key_keeps_a_capturable_en_passant_target() {
        let game = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        let with_target = canonical_position_key(game.board(), Color::White, Some(sq("d6")));
        let without_target = canonical_position_key(game.board(), Color::White, None);
        assert_ne!(with_target, without_target);
        assert!(with_target.ends_with(" w - d6"));
    }

    #[test]
    fn key_separates_castling_rights_and_side_to_move() {
        let board = Board::starting_position();
        let mut moved_king = board.clone();
        if let Some(king) = moved_king.piece_at_mut(sq("e1")) {
            king.has_moved = true;
        }

        let base = canonical_position_key(&board, Color::White, None);
        assert_ne!(base, canonical_position_key(&moved_king, Color::White, None));
        assert_ne!(base, canonical_position_key(&board, Color::Black, None));
    }
}
