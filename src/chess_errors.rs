//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by game logic and the
//! notation/FEN utilities. Illegal move attempts are ordinary user input and
//! come back as values; callers match on the variant to build a message.
//!
//! Broken engine invariants (a side without a king, for instance) are not
//! represented here. They panic, because they mean an earlier bug rather
//! than bad input.

use thiserror::Error;

use crate::game_state::chess_types::{Color, GameStatus, PieceKind, Square};

/// Why a selected piece cannot be moved at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("there is no piece on {0}")]
    NoPieceAt(Square),

    #[error("the piece on {square} does not belong to {turn}, whose turn it is")]
    WrongTurn {
        square: Square,
        turn: Color,
    },

    #[error("the game is over ({0:?})")]
    GameOver(GameStatus),

    #[error("the pawn on {0} must be promoted first")]
    PromotionPending(Square),
}

/// Unified error type for the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// No piece, wrong colour, finished game or an unresolved promotion.
    #[error("invalid selection: {0}")]
    InvalidSelection(SelectionError),

    /// The destination is not reachable by the selected piece.
    #[error("illegal move {from}-{to}")]
    IllegalMove { from: Square, to: Square },

    /// The destination is reachable but would leave the mover's king attacked.
    #[error("{from}-{to} would leave the king in check")]
    MovesIntoCheck { from: Square, to: Square },

    #[error("no promotion is pending")]
    NoPromotionPending,

    #[error("cannot promote to {0}")]
    InvalidPromotionChoice(PieceKind),

    #[error("no pre-move checkpoint has been stored")]
    NoCheckpoint,

    /// A square or move string could not be parsed.
    #[error("invalid algebraic string: {0:?}")]
    InvalidAlgebraicString(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A set-up position that could never arise in a game (missing kings,
    /// the side not to move already in check, ...).
    #[error("invalid position: {0}")]
    InvalidPosition(String),
}

impl ChessErrors {
    /// True for every rejection that [`GameState::make_move`] can return.
    ///
    /// [`GameState::make_move`]: crate::game_state::game_state::GameState::make_move
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            ChessErrors::IllegalMove { .. } | ChessErrors::MovesIntoCheck { .. }
        )
    }
}

impl From<SelectionError> for ChessErrors {
    fn from(value: SelectionError) -> Self {
        ChessErrors::InvalidSelection(value)
    }
}

pub type ChessResult<T> = Result<T, ChessErrors>;
