//! FEN-to-GameState parser.
//!
//! Castling rights are not stored anywhere in the engine, so the castling
//! field is translated into `has_moved` flags: a king or rook that the field
//! does not grant a right to is marked as already moved. Pawns off their
//! start row are marked moved too.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();
    let invalid = |msg: &str| ChessErrors::InvalidFen(format!("{msg} in {fen:?}"));

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut board = parse_board(board_part).map_err(|msg| invalid(&msg))?;
    let turn = parse_side_to_move(side_part).map_err(|msg| invalid(&msg))?;
    apply_castling_rights(&mut board, castling_part).map_err(|msg| invalid(&msg))?;
    let en_passant = parse_en_passant_square(en_passant_part, turn).map_err(|msg| invalid(&msg))?;

    let halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid("invalid halfmove clock"))?;
    let fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid("invalid fullmove number"))?;

    GameState::from_position(board, turn, en_passant, halfmove_clock, fullmove_number)
}

fn parse_board(board_part: &str) -> Result<Board, String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("board layout must contain 8 ranks".to_owned());
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("invalid empty-square count '{ch}'"));
                }
                col += empty_count as usize;
                continue;
            }

            let mut piece = piece_from_fen_char(ch).ok_or_else(|| format!("invalid piece character '{ch}'"))?;
            let square = Square::new(row as u8, col as u8).ok_or("board rank has too many files")?;

            if piece.kind == PieceKind::Pawn {
                piece.has_moved = square.row() != piece.color.pawn_start_row();
            }

            board.set_piece(square, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(format!("rank {} does not sum to 8 files", 8 - row));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(format!("invalid side-to-move field {side_part:?}")),
    }
}

fn apply_castling_rights(board: &mut Board, castling_part: &str) -> Result<(), String> {
    let mut granted: Vec<(Color, CastleSide)> = Vec::new();
    if castling_part != "-" {
        for ch in castling_part.chars() {
            let right = match ch {
                'K' => (Color::White, CastleSide::KingSide),
                'Q' => (Color::White, CastleSide::QueenSide),
                'k' => (Color::Black, CastleSide::KingSide),
                'q' => (Color::Black, CastleSide::QueenSide),
                _ => return Err(format!("invalid castling rights character '{ch}'")),
            };
            granted.push(right);
        }
    }

    let occupied: Vec<(Square, Piece)> = board.pieces().collect();
    for (square, piece) in occupied {
        let on_home_row = square.row() == piece.color.home_row();
        let keeps_right = match piece.kind {
            PieceKind::King => {
                on_home_row && square.col() == 4 && granted.iter().any(|(color, _)| *color == piece.color)
            }
            PieceKind::Rook => {
                on_home_row
                    && granted
                        .iter()
                        .any(|&(color, side)| color == piece.color && side.rook_col() == square.col())
            }
            _ => continue,
        };

        if let Some(slot) = board.piece_at_mut(square) {
            slot.has_moved = !keeps_right;
        }
    }

    for (color, side) in granted {
        if !board.has_castling_right(color, side) {
            return Err(format!(
                "castling right {} granted without king and rook in place",
                castling_char(color, side)
            ));
        }
    }

    Ok(())
}

fn parse_en_passant_square(en_passant_part: &str, turn: Color) -> Result<Option<Square>, String> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part).map_err(|err| err.to_string())?;
    // The skipped square sits behind the pawn that just moved.
    let expected_row = turn.opposite().pawn_start_row() as i8 + turn.opposite().pawn_direction();
    if square.row() as i8 != expected_row {
        return Err(format!("en-passant square {square} is on the wrong rank"));
    }

    Ok(Some(square))
}

pub(crate) fn castling_char(color: Color, side: CastleSide) -> char {
    match (color, side) {
        (Color::White, CastleSide::KingSide) => 'K',
        (Color::White, CastleSide::QueenSide) => 'Q',
        (Color::Black, CastleSide::KingSide) => 'k',
        (Color::Black, CastleSide::QueenSide) => 'q',
    }
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    PieceKind::from_letter(ch).map(|kind| Piece::new(kind, color))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::render_game_state::render_game_state;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    #[test]
    fn parse_starting_fen_and_render_board() {
        let game = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        println!("\n{}", render_game_state(&game));

        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.board(), &Board::starting_position());
        assert_eq!(game.en_passant_target(), None);
    }

    #[test]
    fn missing_castling_rights_mark_pieces_moved() {
        let game = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").expect("FEN should parse");
        let board = game.board();
        assert!(board.has_castling_right(Color::White, CastleSide::KingSide));
        assert!(!board.has_castling_right(Color::White, CastleSide::QueenSide));
        assert!(!board.has_castling_right(Color::Black, CastleSide::KingSide));
        assert!(board.has_castling_right(Color::Black, CastleSide::QueenSide));
        assert!(board.piece_at(sq("a1")).map(|p| p.has_moved).unwrap_or(false));
        assert!(!board.piece_at(sq("e8")).map(|p| p.has_moved).unwrap_or(true));
    }

    #[test]
    fn en_passant_square_is_kept() {
        let game = parse_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3")
            .expect("FEN should parse");
        assert_eq!(game.en_passant_target(), Some(sq("d6")));
    }

    #[test]
    fn clocks_are_optional() {
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w -").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - -").is_ok());
    }

    #[test]
    fn rejects_malformed_fields() {
        for fen in [
            "8/8/8/8/8/8/8 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K2 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 x - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w X - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w K - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - e4 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - - x 1",
            "P3k3/8/8/8/8/8/8/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra",
        ] {
            assert!(parse_fen(fen).is_err(), "{fen} should be rejected");
        }
    }

    #[test]
    fn rejects_impossible_positions() {
        assert!(parse_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/3KK3 w - - 0 1").is_err());
        // Black is in check but it is White to move.
        assert!(parse_fen("4k3/8/8/8/8/8/8/4R1K1 w - - 0 1").is_err());
    }
}
