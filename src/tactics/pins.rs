//! Ray scans for pins.
//!
//! Only bishops, rooks and queens pin. A pin is read literally off the board:
//! the attacker, the attacked piece, and the next piece further along the
//! same ray. No value comparison is made between the last two.

use crate::game_state::chess_types::*;
use crate::moves::piece_rules::ray_directions;
use crate::moves::sliding_moves::{direction_between, first_piece_along};
use crate::tactics::records::{PieceRef, PinRecord};

/// Piece pinned behind `target` by the attacker on `attacker_square`.
///
/// `attacker_square` must actually attack `target`, so the squares between
/// them are empty. Returns the first piece beyond `target` along the
/// attacker's ray when it has the target's colour.
pub fn piece_behind_pin(board: &Board, attacker_square: Square, target: Square) -> Option<(Square, Piece)> {
    let attacker = board.piece_at(attacker_square)?;
    let victim = board.piece_at(target)?;

    let direction = direction_between(attacker_square, target)?;
    if !ray_directions(attacker.kind).contains(&direction) {
        return None;
    }

    first_piece_along(board, target, direction).filter(|(_, behind)| behind.color == victim.color)
}

/// Pins the slider on `from` exerts: along each of its rays, a first enemy
/// piece followed directly by a second enemy piece.
pub fn pins_from(board: &Board, from: Square) -> Vec<PinRecord> {
    let Some(slider) = board.piece_at(from) else {
        return Vec::new();
    };
    let enemy = slider.color.opposite();

    ray_directions(slider.kind)
        .iter()
        .filter_map(|&direction| {
            let (pinned_square, pinned) = first_piece_along(board, from, direction)?;
            if pinned.color != enemy {
                return None;
            }

            let (behind_square, behind) = first_piece_along(board, pinned_square, direction)?;
            (behind.color == enemy).then(|| PinRecord {
                pinner: PieceRef::new(from, slider),
                pinned: PieceRef::new(pinned_square, pinned),
                pinned_to: PieceRef::new(behind_square, behind),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::fen_parser::parse_fen;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    #[test]
    fn friendly_piece_behind_the_target_is_a_pin() {
        let game = parse_fen("4k3/8/8/1b6/8/3N4/8/5K2 w - - 0 1").expect("FEN should parse");
        let behind = piece_behind_pin(game.board(), sq("b5"), sq("d3"));
        assert_eq!(behind.map(|(square, piece)| (square, piece.kind)), Some((sq("f1"), PieceKind::King)));
    }

    #[test]
    fn enemy_behind_or_wrong_ray_is_not_a_pin() {
        // Rook cannot pin along a diagonal, and a knight never pins.
        let game = parse_fen("4k3/8/8/1r6/8/3N4/8/5K2 w - - 0 1").expect("FEN should parse");
        assert_eq!(piece_behind_pin(game.board(), sq("b5"), sq("d3")), None);

        let game = parse_fen("4k3/8/4n3/8/3N4/8/8/1b3K2 w - - 0 1").expect("FEN should parse");
        assert_eq!(piece_behind_pin(game.board(), sq("e6"), sq("d4")), None);
        assert_eq!(piece_behind_pin(game.board(), sq("b1"), sq("d3")), None);
    }

    #[test]
    fn slider_pins_enemy_piece_against_the_one_behind() {
        let game = parse_fen("4k3/4n3/8/8/8/8/8/4RK2 w - - 0 1").expect("FEN should parse");
        let pins = pins_from(game.board(), sq("e1"));
        assert_eq!(pins.len(), 1);
        assert_eq!(pins[0].pinned.square, sq("e7"));
        assert_eq!(pins[0].pinned_to.kind, PieceKind::King);

        assert!(pins_from(game.board(), sq("f1")).is_empty());
    }
}
