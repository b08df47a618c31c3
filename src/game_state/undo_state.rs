use crate::game_state::chess_types::*;

/// A from/to pair as applied to a [`Board`], with the replacement piece for a
/// pawn reaching the last row. `promotion: None` leaves such a pawn on the
/// last row unchanged, which is how a pending promotion looks on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl BoardMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

/// Single undo record for `make_move` / `unmake_move`.
///
/// Every square the move touched is stored with its exact previous content,
/// so unmaking restores `has_moved` and `move_count` as well as placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: BoardMove,
    pub moved_piece: Piece,
    /// Captured piece and the square it was taken from (differs from `mv.to`
    /// for en passant).
    pub captured: Option<(Square, Piece)>,
    /// Castling rook as `(from, to, original piece)`.
    pub castling_rook: Option<(Square, Square, Piece)>,
    pub castle_side: Option<CastleSide>,
    pub promoted_to: Option<PieceKind>,
}

impl UndoState {
    #[inline]
    pub fn is_en_passant(&self) -> bool {
        matches!(self.captured, Some((square, _)) if square != self.mv.to)
    }

    #[inline]
    pub fn captured_kind(&self) -> Option<PieceKind> {
        self.captured.map(|(_, piece)| piece.kind)
    }
}
