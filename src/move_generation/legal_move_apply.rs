//! Board-level make/unmake.
//!
//! `make_move` applies a pseudo-legal move in place and hands back the
//! [`UndoState`] that `unmake_move` needs to put every touched square back
//! exactly as it was. Game bookkeeping (turn, history, en-passant target)
//! lives in `GameState`; this layer only moves pieces.

use crate::game_state::chess_types::*;
use crate::game_state::undo_state::{BoardMove, UndoState};
use crate::moves::pawn_moves::{double_step_midpoint, en_passant_victim};

/// Apply `mv` to `board`. Returns `None` when `mv.from` is empty.
///
/// The move is not validated; callers pass moves taken from the piece rules.
pub fn make_move(board: &mut Board, mv: BoardMove, en_passant: Option<Square>) -> Option<UndoState> {
    let moved_piece = board.take_piece(mv.from)?;
    let color = moved_piece.color;

    let is_en_passant = moved_piece.kind == PieceKind::Pawn
        && en_passant == Some(mv.to)
        && mv.from.col() != mv.to.col()
        && board.is_empty(mv.to);

    let captured = if is_en_passant {
        en_passant_victim(mv.to, color)
            .and_then(|victim| board.take_piece(victim).map(|piece| (victim, piece)))
    } else {
        board.take_piece(mv.to).map(|piece| (mv.to, piece))
    };

    let castle_side = castle_side_for(moved_piece, mv.from, mv.to);
    let castling_rook = castle_side.and_then(|side| {
        let row = mv.from.row();
        let rook_from = Square::new(row, side.rook_col())?;
        let rook_to = Square::new(row, side.rook_target_col())?;
        let rook = board.take_piece(rook_from)?;
        board.set_piece(rook_to, Some(advanced(rook)));
        Some((rook_from, rook_to, rook))
    });

    let mut placed = advanced(moved_piece);
    let promoted_to = match mv.promotion {
        Some(kind) if moved_piece.kind == PieceKind::Pawn && mv.to.row() == color.promotion_row() => {
            placed.kind = kind;
            Some(kind)
        }
        _ => None,
    };
    board.set_piece(mv.to, Some(placed));

    Some(UndoState {
        mv,
        moved_piece,
        captured,
        castling_rook,
        castle_side,
        promoted_to,
    })
}

/// Revert a move applied by [`make_move`].
pub fn unmake_move(board: &mut Board, undo: &UndoState) {
    board.set_piece(undo.mv.to, None);
    board.set_piece(undo.mv.from, Some(undo.moved_piece));

    if let Some((rook_from, rook_to, rook)) = undo.castling_rook {
        board.set_piece(rook_to, None);
        board.set_piece(rook_from, Some(rook));
    }

    if let Some((square, piece)) = undo.captured {
        board.set_piece(square, Some(piece));
    }
}

/// New en-passant target after a move: the skipped square of a pawn double
/// step, otherwise none.
pub fn en_passant_target_after(undo: &UndoState) -> Option<Square> {
    if undo.moved_piece.kind != PieceKind::Pawn {
        return None;
    }
    double_step_midpoint(undo.mv.from, undo.mv.to)
}

fn castle_side_for(piece: Piece, from: Square, to: Square) -> Option<CastleSide> {
    if piece.kind != PieceKind::King
        || from.row() != piece.color.home_row()
        || to.row() != from.row()
        || from.col() != 4
    {
        return None;
    }

    match to.col() {
        6 => Some(CastleSide::KingSide),
        2 => Some(CastleSide::QueenSide),
        _ => None,
    }
}

#[inline]
fn advanced(mut piece: Piece) -> Piece {
    piece.has_moved = true;
    piece.move_count = piece.move_count.saturating_add(1);
    piece
}
