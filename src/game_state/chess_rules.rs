//! Canonical chess-rule constants and material rules.

use crate::game_state::chess_types::{Board, PieceKind};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Occurrences of one position that end the game (fivefold repetition).
pub const REPETITION_DRAW_COUNT: u32 = 5;

/// Pieces a pawn may become, strongest first.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

#[inline]
pub fn is_promotion_choice(kind: PieceKind) -> bool {
    PROMOTION_CHOICES.contains(&kind)
}

/// King versus king, or king and one minor piece versus a bare king.
///
/// Other dead positions (same-coloured bishops and the like) are not detected.
pub fn is_insufficient_material(board: &Board) -> bool {
    let mut extras = board
        .pieces()
        .filter(|(_, piece)| piece.kind != PieceKind::King)
        .map(|(_, piece)| piece.kind);

    match (extras.next(), extras.next()) {
        (None, _) => true,
        (Some(PieceKind::Knight | PieceKind::Bishop), None) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    fn material_draw(fen: &str) -> bool {
        let game = parse_fen(fen).expect("FEN should parse");
        is_insufficient_material(game.board())
    }

    #[test]
    fn bare_kings_and_single_minor_are_dead() {
        assert!(material_draw("4k3/8/8/8/8/8/8/4K3 w - - 0 1"));
        assert!(material_draw("4k3/8/8/8/8/8/8/4KN2 w - - 0 1"));
        assert!(material_draw("4kb2/8/8/8/8/8/8/4K3 w - - 0 1"));
    }

    #[test]
    fn rook_pawn_or_two_minors_can_still_mate() {
        assert!(!material_draw("4k3/8/8/8/8/8/8/4KR2 w - - 0 1"));
        assert!(!material_draw("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1"));
        assert!(!material_draw("4kn2/8/8/8/8/8/8/4KN2 w - - 0 1"));
        assert!(!material_draw(STARTING_POSITION_FEN));
    }

    #[test]
    fn promotion_choices_exclude_pawn_and_king() {
        assert!(is_promotion_choice(PieceKind::Knight));
        assert!(!is_promotion_choice(PieceKind::King));
        assert!(!is_promotion_choice(PieceKind::Pawn));
    }
}
