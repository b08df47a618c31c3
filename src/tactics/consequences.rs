//! Per-move consequence simulation.
//!
//! Each legal move is played on a scratch copy of the board, inspected, and
//! unmade again. The copy is shared by every move of one call, so unmaking
//! has to restore it exactly; debug builds assert that it does.

use crate::game_state::chess_types::*;
use crate::game_state::undo_state::{BoardMove, UndoState};
use crate::move_generation::legal_move_apply::{en_passant_target_after, make_move, unmake_move};
use crate::move_generation::legal_move_checks::{attackers_to_square, is_in_check};
use crate::move_generation::legal_move_generator::{has_legal_moves, legal_move_list};
use crate::move_generation::move_generator::{leaves_king_in_check, LegalMove};
use crate::moves::piece_rules::attack_squares;
use crate::tactics::annotator::AnnotatorConfig;
use crate::tactics::pins::pins_from;
use crate::tactics::records::{MoveConsequence, PieceRef};

/// One record per legal move of `color`, in generation order.
pub fn consequences(
    board: &Board,
    color: Color,
    en_passant: Option<Square>,
    config: &AnnotatorConfig,
) -> Vec<MoveConsequence> {
    let mut scratch = board.clone();
    legal_move_list(board, color, en_passant)
        .into_iter()
        .filter_map(|mv| simulate(&mut scratch, mv, en_passant, config))
        .collect()
}

/// Play `mv`, inspect the result, and take it back.
pub fn simulate(
    board: &mut Board,
    mv: LegalMove,
    en_passant: Option<Square>,
    config: &AnnotatorConfig,
) -> Option<MoveConsequence> {
    #[cfg(debug_assertions)]
    let snapshot = board.clone();

    let promotion = mv.is_promotion().then_some(config.simulated_promotion);
    let board_move = match promotion {
        Some(kind) => BoardMove::with_promotion(mv.from, mv.to, kind),
        None => BoardMove::new(mv.from, mv.to),
    };

    let undo = make_move(board, board_move, en_passant)?;
    let consequence = inspect(board, &mv, &undo, promotion, config);
    unmake_move(board, &undo);

    #[cfg(debug_assertions)]
    assert_eq!(*board, snapshot, "simulating {} left the board changed", mv.notation());

    Some(consequence)
}

fn inspect(
    board: &mut Board,
    mv: &LegalMove,
    undo: &UndoState,
    promotion: Option<PieceKind>,
    config: &AnnotatorConfig,
) -> MoveConsequence {
    let mover = mv.piece.color;
    let enemy = mover.opposite();
    let next_en_passant = en_passant_target_after(undo);

    let attacked_after: Vec<PieceRef> = attack_squares(board, mv.to)
        .into_iter()
        .filter_map(|square| {
            board
                .piece_at(square)
                .filter(|piece| piece.color == enemy)
                .map(|piece| PieceRef::new(square, piece))
        })
        .collect();

    let significant = attacked_after
        .iter()
        .filter(|target| target.value() >= config.fork_min_value)
        .count();

    let is_check = is_in_check(board, enemy);
    let is_checkmate = is_check && !has_legal_moves(board, enemy, next_en_passant);

    let retaliation = retaliation_on(board, mv.to, enemy, next_en_passant);

    let defenders = attackers_to_square(board, mv.to, mover)
        .into_iter()
        .map(|(square, piece)| PieceRef::new(square, piece))
        .collect();

    let pins = pins_from(board, mv.to);

    let mut notation = mv.notation();
    if let Some(kind) = promotion {
        notation.push('=');
        notation.push(kind.letter());
    }

    MoveConsequence {
        from: mv.from,
        to: mv.to,
        piece: PieceRef::new(mv.from, mv.piece),
        notation,
        promotion,
        captured: undo.captured.map(|(square, piece)| PieceRef::new(square, piece)),
        attacked_after,
        is_fork: significant >= 2,
        is_check,
        is_checkmate,
        retaliation,
        defenders,
        creates_pin: !pins.is_empty(),
        pins,
    }
}

/// Enemy pieces with a legal capture on `square`.
fn retaliation_on(board: &mut Board, square: Square, enemy: Color, en_passant: Option<Square>) -> Vec<PieceRef> {
    attackers_to_square(board, square, enemy)
        .into_iter()
        .filter(|&(from, _)| !leaves_king_in_check(board, BoardMove::new(from, square), en_passant))
        .map(|(from, piece)| PieceRef::new(from, piece))
        .collect()
}
