//! Lazy legal-move iteration.
//!
//! [`LegalMoves`] walks the mover's pieces in grid order, asks the piece rules
//! for pseudo-legal destinations, and filters each one by simulating it on a
//! private copy of the board. Nothing is cached between calls.

use crate::game_state::chess_types::*;
use crate::game_state::undo_state::BoardMove;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::moves::piece_rules::valid_destinations;
use crate::utils::algebraic::dashed_move;

/// A legal `(from, to, piece)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegalMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
}

impl LegalMove {
    /// True when this move puts a pawn on its last row.
    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.to.row() == self.piece.color.promotion_row()
    }

    /// `"e2-e4"` form used by the presentation layer.
    pub fn notation(&self) -> String {
        dashed_move(self.from, self.to)
    }
}

/// Iterator over the legal moves of one colour.
pub struct LegalMoves {
    scratch: Board,
    en_passant: Option<Square>,
    origins: std::vec::IntoIter<(Square, Piece)>,
    current: Option<(Square, Piece, std::vec::IntoIter<Square>)>,
}

impl LegalMoves {
    pub fn new(board: &Board, color: Color, en_passant: Option<Square>) -> Self {
        let origins: Vec<(Square, Piece)> = board.pieces_of(color).collect();
        Self {
            scratch: board.clone(),
            en_passant,
            origins: origins.into_iter(),
            current: None,
        }
    }

    /// Iterator that yields nothing, for positions where no move may be played.
    pub fn none(board: &Board) -> Self {
        Self {
            scratch: board.clone(),
            en_passant: None,
            origins: Vec::new().into_iter(),
            current: None,
        }
    }

    /// Iterator restricted to the piece standing on `from`.
    pub fn from_square(board: &Board, from: Square, en_passant: Option<Square>) -> Self {
        let origins: Vec<(Square, Piece)> =
            board.piece_at(from).map(|piece| (from, piece)).into_iter().collect();
        Self {
            scratch: board.clone(),
            en_passant,
            origins: origins.into_iter(),
            current: None,
        }
    }
}

impl Iterator for LegalMoves {
    type Item = LegalMove;

    fn next(&mut self) -> Option<LegalMove> {
        let en_passant = self.en_passant;
        loop {
            if let Some((from, piece, destinations)) = self.current.as_mut() {
                for to in destinations.by_ref() {
                    let mv = BoardMove::new(*from, to);
                    if !leaves_king_in_check(&mut self.scratch, mv, en_passant) {
                        return Some(LegalMove {
                            from: *from,
                            to,
                            piece: *piece,
                        });
                    }
                }
            }

            let (from, piece) = self.origins.next()?;
            let destinations = valid_destinations(&self.scratch, from, en_passant);
            self.current = Some((from, piece, destinations.into_iter()));
        }
    }
}

/// Simulate `mv`, report whether the mover's own king is attacked afterwards,
/// and undo it. The board is unchanged on return.
pub fn leaves_king_in_check(board: &mut Board, mv: BoardMove, en_passant: Option<Square>) -> bool {
    let Some(undo) = make_move(board, mv, en_passant) else {
        return false;
    };
    let in_check = is_in_check(board, undo.moved_piece.color);
    unmake_move(board, &undo);
    in_check
}
