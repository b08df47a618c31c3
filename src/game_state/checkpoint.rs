//! Take-back snapshot.

use std::collections::HashMap;

use crate::game_state::chess_types::*;
use crate::game_state::move_record::MoveRecord;

/// Structural copy of everything a committed move can change.
///
/// A checkpoint is owned by the [`GameState`] it was taken from. Reverting
/// consumes it, and a reset game starts without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    pub(crate) board: Board,
    pub(crate) turn: Color,
    pub(crate) status: GameStatus,
    pub(crate) move_history: Vec<MoveRecord>,
    pub(crate) position_counts: HashMap<String, u32>,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) promotion_pending: Option<PendingPromotion>,
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,
}

impl Checkpoint {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Number of half-moves in the history when the snapshot was taken.
    pub fn history_len(&self) -> usize {
        self.move_history.len()
    }
}
