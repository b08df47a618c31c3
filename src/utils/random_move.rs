//! Uniform random choice among legal moves.
//!
//! Used as the fallback when an outside agent produces nothing usable, and
//! by the randomized playout tests. The caller supplies the RNG so a seeded
//! generator gives a repeatable game.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::LegalMove;

/// A random legal move for the side to move, or `None` when the game is over
/// or a promotion is waiting to be resolved.
pub fn random_legal_move<R: Rng + ?Sized>(game_state: &GameState, rng: &mut R) -> Option<LegalMove> {
    if game_state.status().is_terminal() {
        return None;
    }

    let legal_moves: Vec<LegalMove> = game_state.legal_moves(game_state.turn()).collect();
    legal_moves.as_slice().choose(rng).copied()
}
