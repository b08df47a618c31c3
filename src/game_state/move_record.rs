//! Completed half-moves as kept in the game history.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::game_state::chess_types::*;
use crate::utils::algebraic::uci_move;

/// One completed half-move. Records are append-only; the history is only
/// ever shortened by reverting to a checkpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    /// 1-based half-move number within the game.
    pub index: usize,
    pub color: Color,
    pub piece_kind: PieceKind,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceKind>,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub promoted_to: Option<PieceKind>,
    pub castling: Option<CastleSide>,
    pub en_passant: bool,
    pub notation: String,
    /// Position after the move, as FEN.
    pub fen_after: String,
    pub played_at: DateTime<Utc>,
}

/// Facts about a finished half-move, gathered before the record is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HalfMove {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceKind>,
    pub promoted_to: Option<PieceKind>,
    pub castling: Option<CastleSide>,
    pub en_passant: bool,
}

impl MoveRecord {
    pub(crate) fn new(index: usize, half_move: HalfMove, is_check: bool, is_checkmate: bool, fen_after: String) -> Self {
        let notation = describe(&half_move, is_check, is_checkmate);
        Self {
            index,
            color: half_move.piece.color,
            piece_kind: half_move.piece.kind,
            from: half_move.from,
            to: half_move.to,
            captured: half_move.captured,
            is_check,
            is_checkmate,
            promoted_to: half_move.promoted_to,
            castling: half_move.castling,
            en_passant: half_move.en_passant,
            notation,
            fen_after,
            played_at: Utc::now(),
        }
    }

    /// Compact coordinate form, for example `"c1h6"` or `"e7e8q"`.
    pub fn uci(&self) -> String {
        uci_move(self.from, self.to, self.promoted_to)
    }
}

/// `"♗ c1-h6 (captures ♝)"`, `"♔ e1-g1 O-O"`, `"♙ e7-e8=Q+"` and so on.
fn describe(half_move: &HalfMove, is_check: bool, is_checkmate: bool) -> String {
    let piece = half_move.piece;
    let mut text = format!("{} {}-{}", piece.symbol(), half_move.from, half_move.to);

    if let Some(kind) = half_move.promoted_to {
        text.push('=');
        text.push(kind.letter());
    }
    if let Some(side) = half_move.castling {
        text.push(' ');
        text.push_str(side.notation());
    }
    if let Some(kind) = half_move.captured {
        let victim = Piece::new(kind, piece.color.opposite());
        text.push_str(&format!(" (captures {})", victim.symbol()));
    }
    if half_move.en_passant {
        text.push_str(" e.p.");
    }

    if is_checkmate {
        text.push('#');
    } else if is_check {
        text.push('+');
    }

    text
}
