//! Per-kind dispatch for movement and attack generation.
//!
//! Adding a piece kind makes these matches non-exhaustive, so the compiler
//! points at every rule that needs an entry.

use crate::game_state::chess_types::{Board, PieceKind, Square};
use crate::moves::bishop_moves::{bishop_attacks, bishop_destinations};
use crate::moves::king_moves::{king_attacks, king_destinations};
use crate::moves::knight_moves::{knight_attacks, knight_destinations};
use crate::moves::pawn_moves::{pawn_attacks, pawn_destinations};
use crate::moves::queen_moves::{queen_attacks, queen_destinations};
use crate::moves::rook_moves::{rook_attacks, rook_destinations};
use crate::moves::sliding_moves::{Direction, ALL_DIRECTIONS, DIAGONAL, ORTHOGONAL};

/// Pseudo-legal destinations of the piece on `from` (own king safety ignored).
/// Empty when `from` is empty.
pub fn valid_destinations(board: &Board, from: Square, en_passant: Option<Square>) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    match piece.kind {
        PieceKind::Pawn => pawn_destinations(board, from, piece.color, en_passant),
        PieceKind::Knight => knight_destinations(board, from, piece.color),
        PieceKind::Bishop => bishop_destinations(board, from, piece.color),
        PieceKind::Rook => rook_destinations(board, from, piece.color),
        PieceKind::Queen => queen_destinations(board, from, piece.color),
        PieceKind::King => king_destinations(board, from, piece.color),
    }
}

/// Squares the piece on `from` attacks or defends. Empty when `from` is empty.
pub fn attack_squares(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    match piece.kind {
        PieceKind::Pawn => pawn_attacks(from, piece.color),
        PieceKind::Knight => knight_attacks(from),
        PieceKind::Bishop => bishop_attacks(board, from),
        PieceKind::Rook => rook_attacks(board, from),
        PieceKind::Queen => queen_attacks(board, from),
        PieceKind::King => king_attacks(from),
    }
}

/// Ray directions of a sliding kind; empty for the others.
pub fn ray_directions(kind: PieceKind) -> &'static [Direction] {
    match kind {
        PieceKind::Bishop => &DIAGONAL,
        PieceKind::Rook => &ORTHOGONAL,
        PieceKind::Queen => &ALL_DIRECTIONS,
        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => &[],
    }
}
