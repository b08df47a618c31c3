//! Plain-text position description for downstream consumers.
//!
//! The output is deterministic: pieces are listed king first and then in grid
//! order, attacked squares in grid order. Every fact is stated outright so a
//! reader never has to work anything out from the board.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::moves::king_moves::castling_moves;
use crate::moves::piece_rules::attack_squares;

const LISTING_ORDER: [PieceKind; 6] = [
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Pawn,
];

pub fn narrative(game: &GameState) -> String {
    let board = game.board();
    let mut lines = vec![
        format!("Side to move: {}", game.turn()),
        format!("Status: {}", game.status_message()),
    ];

    for color in Color::BOTH {
        lines.push(format!("{color} pieces:"));
        for kind in LISTING_ORDER {
            for (square, piece) in board.pieces_of(color).filter(|(_, piece)| piece.kind == kind) {
                lines.push(format!("  {}", describe_piece(board, square, piece)));
            }
        }
    }

    for color in Color::BOTH {
        let in_check = if is_in_check(board, color) { "yes" } else { "no" };
        lines.push(format!("{color} in check: {in_check}"));
    }

    for color in Color::BOTH {
        lines.push(format!("{color} castling: {}", describe_castling(board, color)));
    }

    lines.push(match game.en_passant_target() {
        Some(target) => format!("En passant target: {target}"),
        None => "En passant target: none".to_owned(),
    });

    lines.push(match game.promotion_pending() {
        Some(pending) => format!(
            "Pending promotion: {} pawn on {} (from {})",
            pending.piece.color, pending.to, pending.from
        ),
        None => "Pending promotion: none".to_owned(),
    });

    lines.push(match game.last_move() {
        Some(record) => format!("Last move: {} by {}", record.notation, record.color),
        None => "Last move: none".to_owned(),
    });

    lines.join("\n")
}

fn describe_piece(board: &Board, square: Square, piece: Piece) -> String {
    let moved = if piece.has_moved {
        format!("moved {}x", piece.move_count)
    } else {
        "unmoved".to_owned()
    };

    let mut attacked = attack_squares(board, square);
    attacked.sort();
    let attacked = if attacked.is_empty() {
        "nothing".to_owned()
    } else {
        attacked
            .iter()
            .map(|square| square.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!("{} on {square} ({moved}), attacks {attacked}", piece.kind)
}

fn describe_castling(board: &Board, color: Color) -> String {
    let available: Vec<CastleSide> = board
        .find_king(color)
        .map(|king| castling_moves(board, king, color).into_iter().map(|(side, _)| side).collect())
        .unwrap_or_default();

    let sides: Vec<String> = CastleSide::BOTH
        .iter()
        .map(|&side| {
            let state = if !board.has_castling_right(color, side) {
                "no right"
            } else if available.contains(&side) {
                "available now"
            } else {
                "right kept, not available now"
            };
            format!("{} {state}", side.notation())
        })
        .collect();

    sides.join("; ")
}
