//! Entry point of the tactical annotation layer.
//!
//! The annotator reads a [`GameState`] and never changes it: move
//! simulation happens on a private copy of the board.

use tracing::debug;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::is_promotion_choice;
use crate::game_state::chess_types::*;
use crate::tactics::consequences::consequences;
use crate::tactics::narrative::narrative;
use crate::tactics::records::{to_json, MoveConsequence, ThreatRecord};
use crate::tactics::threats::threats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotatorConfig {
    /// Lowest piece value that counts towards a fork. The king always counts.
    pub fork_min_value: u32,
    /// Piece a promoting pawn becomes while its consequences are simulated.
    pub simulated_promotion: PieceKind,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            fork_min_value: 3,
            simulated_promotion: PieceKind::Queen,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TacticalAnnotator {
    config: AnnotatorConfig,
}

impl TacticalAnnotator {
    pub fn new(config: AnnotatorConfig) -> ChessResult<Self> {
        if !is_promotion_choice(config.simulated_promotion) {
            return Err(ChessErrors::InvalidPromotionChoice(config.simulated_promotion));
        }
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    /// Pieces of `color` under attack, with attackers, defenders and pins.
    pub fn threats(&self, game: &GameState, color: Color) -> Vec<ThreatRecord> {
        let records = threats(game.board(), color);
        debug!(%color, count = records.len(), "threat scan");
        records
    }

    /// One record per legal move of `color`; none while a promotion is pending.
    pub fn consequences(&self, game: &GameState, color: Color) -> Vec<MoveConsequence> {
        if game.promotion_pending().is_some() {
            debug!(%color, "consequence scan skipped, promotion pending");
            return Vec::new();
        }
        let en_passant = if color == game.turn() {
            game.en_passant_target()
        } else {
            None
        };
        let records = consequences(game.board(), color, en_passant, &self.config);
        debug!(%color, count = records.len(), "consequence scan");
        records
    }

    pub fn narrative(&self, game: &GameState) -> String {
        narrative(game)
    }

    pub fn threats_json(&self, game: &GameState, color: Color) -> serde_json::Result<String> {
        to_json(&self.threats(game, color))
    }

    pub fn consequences_json(&self, game: &GameState, color: Color) -> serde_json::Result<String> {
        to_json(&self.consequences(game, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_an_impossible_promotion_piece() {
        let config = AnnotatorConfig {
            simulated_promotion: PieceKind::King,
            ..AnnotatorConfig::default()
        };
        assert_eq!(
            TacticalAnnotator::new(config).map(|_| ()),
            Err(ChessErrors::InvalidPromotionChoice(PieceKind::King))
        );
        assert!(TacticalAnnotator::new(AnnotatorConfig::default()).is_ok());
    }

    #[test]
    fn annotating_does_not_touch_the_game() {
        let mut game = GameState::new();
        game.make_move_from_notation("e2-e4").expect("legal");
        let before = game.clone();

        let annotator = TacticalAnnotator::default();
        for color in Color::BOTH {
            annotator.threats(&game, color);
            annotator.consequences(&game, color);
        }
        annotator.narrative(&game);

        assert_eq!(game.board(), before.board());
        assert_eq!(game.fen(), before.fen());
        assert_eq!(game.position_counts(), before.position_counts());
    }

    #[test]
    fn json_output_is_a_list_of_records() {
        let game = GameState::new();
        let annotator = TacticalAnnotator::default();
        let json = annotator
            .consequences_json(&game, Color::White)
            .expect("records should serialize");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(parsed.as_array().map(Vec::len), Some(20));
        assert_eq!(annotator.threats_json(&game, Color::Black).expect("serializes"), "[]");
    }
}
