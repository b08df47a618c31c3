//! Turn and status state machine for one game.
//!
//! `GameState` owns the board and everything that depends on move order: the
//! side to move, the en-passant target, the history, repetition counts and a
//! pending promotion. It is mutated only through [`GameState::make_move`] and
//! [`GameState::promote_pawn`], plus the explicit checkpoint calls used for
//! take-backs.

use std::collections::HashMap;

use tracing::{debug, info, trace, warn};

use crate::chess_errors::{ChessErrors, ChessResult, SelectionError};
use crate::game_state::checkpoint::Checkpoint;
use crate::game_state::chess_rules::{
    is_insufficient_material, is_promotion_choice, REPETITION_DRAW_COUNT,
};
use crate::game_state::chess_types::*;
use crate::game_state::move_record::{HalfMove, MoveRecord};
use crate::game_state::undo_state::BoardMove;
use crate::move_generation::legal_move_apply::{self, en_passant_target_after};
use crate::move_generation::legal_move_checks;
use crate::move_generation::legal_move_generator::{self, pseudo_legal_moves};
use crate::move_generation::move_generator::{leaves_king_in_check, LegalMoves};
use crate::moves::pawn_moves::en_passant_victim;
use crate::utils::algebraic::parse_move_text;
use crate::utils::fen_generator::{canonical_position_key, generate_fen};

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: Color,
    status: GameStatus,
    move_history: Vec<MoveRecord>,
    position_counts: HashMap<String, u32>,
    en_passant_target: Option<Square>,
    promotion_pending: Option<PendingPromotion>,

    // Clocks are carried for FEN output only.
    halfmove_clock: u16,
    fullmove_number: u16,

    checkpoint: Option<Checkpoint>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A new game from the standard starting position.
    pub fn new() -> Self {
        Self::assemble(Board::starting_position(), Color::White, None, 0, 1)
    }

    /// A game starting from an arbitrary position.
    ///
    /// Rejects positions that could not arise in play: a side without exactly
    /// one king, pawns on a last row, the side not to move already in check,
    /// or an en-passant target with no pawn behind it.
    pub fn from_position(
        board: Board,
        turn: Color,
        en_passant_target: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> ChessResult<Self> {
        for color in Color::BOTH {
            let kings = board
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(ChessErrors::InvalidPosition(format!("{color} has {kings} kings")));
            }
        }

        if let Some((square, _)) = board
            .pieces()
            .find(|(square, piece)| {
                piece.kind == PieceKind::Pawn && (square.row() == 0 || square.row() == 7)
            })
        {
            return Err(ChessErrors::InvalidPosition(format!("pawn on the last rank at {square}")));
        }

        if legal_move_checks::is_in_check(&board, turn.opposite()) {
            return Err(ChessErrors::InvalidPosition(format!(
                "{} is in check but {turn} is to move",
                turn.opposite()
            )));
        }

        if let Some(target) = en_passant_target {
            let passed_pawn = en_passant_victim(target, turn)
                .and_then(|square| board.piece_at(square));
            let valid = board.is_empty(target)
                && matches!(
                    passed_pawn,
                    Some(p) if p.kind == PieceKind::Pawn && p.color == turn.opposite()
                );
            if !valid {
                return Err(ChessErrors::InvalidPosition(format!(
                    "no pawn can have just passed {target}"
                )));
            }
        }

        Ok(Self::assemble(board, turn, en_passant_target, halfmove_clock, fullmove_number))
    }

    fn assemble(
        board: Board,
        turn: Color,
        en_passant_target: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> Self {
        let mut game = Self {
            board,
            turn,
            status: GameStatus::InProgress,
            move_history: Vec::new(),
            position_counts: HashMap::new(),
            en_passant_target,
            promotion_pending: None,
            halfmove_clock,
            fullmove_number,
            checkpoint: None,
        };

        // The starting position is its own first occurrence.
        let occurrences = game.record_position();
        game.status = game.compute_status(occurrences);
        game
    }

    /// Start over from the standard position, dropping history and any
    /// stored checkpoint.
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("game reset");
    }

    // ----- accessors -----

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn promotion_pending(&self) -> Option<PendingPromotion> {
        self.promotion_pending
    }

    #[inline]
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.move_history.last()
    }

    #[inline]
    pub fn position_counts(&self) -> &HashMap<String, u32> {
        &self.position_counts
    }

    /// How many times the current position has occurred, this time included.
    pub fn repetition_count(&self) -> u32 {
        self.position_counts
            .get(&self.position_key())
            .copied()
            .unwrap_or(0)
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    pub fn fen(&self) -> String {
        generate_fen(self)
    }

    pub fn position_key(&self) -> String {
        canonical_position_key(&self.board, self.turn, self.en_passant_target)
    }

    // ----- move queries -----

    /// Lazy legal moves of `color`. The en-passant target only applies to the
    /// side to move. Nothing is playable while a promotion is pending.
    pub fn legal_moves(&self, color: Color) -> LegalMoves {
        if self.promotion_pending.is_some() {
            return LegalMoves::none(&self.board);
        }
        LegalMoves::new(&self.board, color, self.en_passant_for(color))
    }

    /// Legal moves of `color` as `"e2-e4"` strings.
    pub fn legal_move_notations(&self, color: Color) -> Vec<String> {
        self.legal_moves(color).map(|mv| mv.notation()).collect()
    }

    pub fn has_legal_moves(&self, color: Color) -> bool {
        let en_passant = self.en_passant_for(color);
        self.promotion_pending.is_none()
            && legal_move_generator::has_legal_moves(&self.board, color, en_passant)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        legal_move_checks::is_in_check(&self.board, color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        legal_move_generator::is_checkmate(&self.board, color, self.en_passant_for(color))
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        legal_move_generator::is_stalemate(&self.board, color, self.en_passant_for(color))
    }

    #[inline]
    fn en_passant_for(&self, color: Color) -> Option<Square> {
        if color == self.turn {
            self.en_passant_target
        } else {
            None
        }
    }

    // ----- mutation -----

    /// Play `from` to `to` for the side to move.
    ///
    /// A pawn reaching the last row leaves the move unfinished: the result is
    /// [`MoveOutcome::PromotionPending`], the turn does not pass, and
    /// [`GameState::promote_pawn`] must be called before anything else.
    pub fn make_move(&mut self, from: Square, to: Square) -> ChessResult<MoveOutcome> {
        let result = self.try_make_move(from, to);
        if let Err(err) = &result {
            warn!(%from, %to, error = %err, "move rejected");
        }
        result
    }

    fn try_make_move(&mut self, from: Square, to: Square) -> ChessResult<MoveOutcome> {
        let piece = self.select(from)?;

        if !pseudo_legal_moves(&self.board, from, self.en_passant_target).contains(&to) {
            return Err(ChessErrors::IllegalMove { from, to });
        }

        let mv = BoardMove::new(from, to);
        if leaves_king_in_check(&mut self.board, mv, self.en_passant_target) {
            return Err(ChessErrors::MovesIntoCheck { from, to });
        }

        let undo = legal_move_apply::make_move(&mut self.board, mv, self.en_passant_target)
            .ok_or(ChessErrors::IllegalMove { from, to })?;

        if piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row() {
            self.en_passant_target = None;
            self.promotion_pending = Some(PendingPromotion {
                from,
                to,
                captured: undo.captured_kind(),
                piece,
            });
            debug!(%from, %to, color = %piece.color, "promotion pending");
            return Ok(MoveOutcome::PromotionPending { square: to });
        }

        let half_move = HalfMove {
            piece,
            from,
            to,
            captured: undo.captured_kind(),
            promoted_to: None,
            castling: undo.castle_side,
            en_passant: undo.is_en_passant(),
        };
        let next_en_passant = en_passant_target_after(&undo);
        Ok(MoveOutcome::Completed(self.complete_half_move(half_move, next_en_passant)))
    }

    /// Parse `"e2-e4"`, `"e2e4"` or `"e7e8q"` and play it. A promotion piece in
    /// the text resolves the promotion in the same call; on other moves it is
    /// ignored.
    pub fn make_move_from_notation(&mut self, text: &str) -> ChessResult<MoveOutcome> {
        let parsed = parse_move_text(text)?;
        let outcome = self.make_move(parsed.from, parsed.to)?;

        match (outcome, parsed.promotion) {
            (MoveOutcome::PromotionPending { .. }, Some(kind)) => {
                self.promote_pawn(kind).map(MoveOutcome::Completed)
            }
            _ => Ok(outcome),
        }
    }

    /// Finish a pending promotion by replacing the pawn with `kind`.
    pub fn promote_pawn(&mut self, kind: PieceKind) -> ChessResult<GameStatus> {
        let Some(pending) = self.promotion_pending else {
            warn!(%kind, "promotion requested with none pending");
            return Err(ChessErrors::NoPromotionPending);
        };
        if !is_promotion_choice(kind) {
            warn!(%kind, "promotion choice rejected");
            return Err(ChessErrors::InvalidPromotionChoice(kind));
        }

        if let Some(pawn) = self.board.piece_at_mut(pending.to) {
            pawn.kind = kind;
        }
        self.promotion_pending = None;

        let half_move = HalfMove {
            piece: pending.piece,
            from: pending.from,
            to: pending.to,
            captured: pending.captured,
            promoted_to: Some(kind),
            castling: None,
            en_passant: false,
        };
        Ok(self.complete_half_move(half_move, None))
    }

    fn select(&self, from: Square) -> Result<Piece, SelectionError> {
        if let Some(pending) = self.promotion_pending {
            return Err(SelectionError::PromotionPending(pending.to));
        }
        if self.status.is_terminal() {
            return Err(SelectionError::GameOver(self.status));
        }

        let piece = self.board.piece_at(from).ok_or(SelectionError::NoPieceAt(from))?;
        if piece.color != self.turn {
            return Err(SelectionError::WrongTurn {
                square: from,
                turn: self.turn,
            });
        }
        Ok(piece)
    }

    fn complete_half_move(
        &mut self,
        half_move: HalfMove,
        next_en_passant: Option<Square>,
    ) -> GameStatus {
        let mover = half_move.piece.color;

        if half_move.piece.kind == PieceKind::Pawn || half_move.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if mover == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.turn = mover.opposite();
        self.en_passant_target = next_en_passant;

        let occurrences = self.record_position();
        self.status = self.compute_status(occurrences);

        let is_check = legal_move_checks::is_in_check(&self.board, self.turn);
        let record = MoveRecord::new(
            self.move_history.len() + 1,
            half_move,
            is_check,
            self.status == GameStatus::Checkmate,
            generate_fen(self),
        );
        debug!(
            ply = record.index,
            notation = %record.notation,
            fen = %record.fen_after,
            "move played"
        );
        self.move_history.push(record);

        if self.status.is_terminal() {
            info!(
                status = ?self.status,
                plies = self.move_history.len(),
                "{}",
                self.status_message()
            );
        }

        self.status
    }

    fn record_position(&mut self) -> u32 {
        let count = self.position_counts.entry(self.position_key()).or_insert(0);
        *count += 1;
        *count
    }

    /// First match wins: checkmate, stalemate, repetition, dead material,
    /// check.
    fn compute_status(&self, occurrences: u32) -> GameStatus {
        let in_check = legal_move_checks::is_in_check(&self.board, self.turn);
        if !legal_move_generator::has_legal_moves(&self.board, self.turn, self.en_passant_target) {
            return if in_check {
                GameStatus::Checkmate
            } else {
                GameStatus::Stalemate
            };
        }

        if occurrences >= REPETITION_DRAW_COUNT {
            GameStatus::DrawRepetition
        } else if is_insufficient_material(&self.board) {
            GameStatus::DrawMaterial
        } else if in_check {
            GameStatus::Check
        } else {
            GameStatus::InProgress
        }
    }

    // ----- checkpoint -----

    /// Snapshot the game so the next move can be taken back. Replaces any
    /// earlier snapshot.
    pub fn store_pre_move_state(&mut self) {
        self.checkpoint = Some(Checkpoint {
            board: self.board.clone(),
            turn: self.turn,
            status: self.status,
            move_history: self.move_history.clone(),
            position_counts: self.position_counts.clone(),
            en_passant_target: self.en_passant_target,
            promotion_pending: self.promotion_pending,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        });
        trace!(plies = self.move_history.len(), "checkpoint stored");
    }

    /// Restore the stored snapshot, consuming it.
    pub fn revert_to_pre_move_state(&mut self) -> ChessResult<()> {
        let checkpoint = self.checkpoint.take().ok_or(ChessErrors::NoCheckpoint)?;

        self.board = checkpoint.board;
        self.turn = checkpoint.turn;
        self.status = checkpoint.status;
        self.move_history = checkpoint.move_history;
        self.position_counts = checkpoint.position_counts;
        self.en_passant_target = checkpoint.en_passant_target;
        self.promotion_pending = checkpoint.promotion_pending;
        self.halfmove_clock = checkpoint.halfmove_clock;
        self.fullmove_number = checkpoint.fullmove_number;

        trace!(plies = self.move_history.len(), "checkpoint restored");
        Ok(())
    }

    /// Drop the stored snapshot, if any.
    pub fn clear_pre_move_state(&mut self) {
        if self.checkpoint.take().is_some() {
            trace!("checkpoint cleared");
        }
    }

    pub fn checkpoint(&self) -> Option<&Checkpoint> {
        self.checkpoint.as_ref()
    }

    // ----- presentation -----

    pub fn status_message(&self) -> String {
        if let Some(pending) = self.promotion_pending {
            return format!("{} must choose a piece for the pawn on {}.", self.turn, pending.to);
        }

        match self.status {
            GameStatus::InProgress => format!("{}'s turn.", self.turn),
            GameStatus::Check => format!("{}'s turn (in check).", self.turn),
            GameStatus::Checkmate => format!("Checkmate! {} wins.", self.turn.opposite()),
            GameStatus::Stalemate => "Stalemate! The game is a draw.".to_owned(),
            GameStatus::DrawRepetition => "Draw by fivefold repetition.".to_owned(),
            GameStatus::DrawMaterial => "Draw by insufficient material.".to_owned(),
        }
    }

    /// Human-readable history, one entry per half-move.
    pub fn move_history_notation(&self) -> Vec<String> {
        self.move_history
            .iter()
            .map(|record| record.notation.clone())
            .collect()
    }

    pub fn move_history_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.move_history)
    }
}
