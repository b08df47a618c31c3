use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::attackers_to_square;
use crate::tactics::pins::piece_behind_pin;
use crate::tactics::records::{PieceRef, ThreatRecord};

/// Every piece of `color` attacked by at least one enemy piece.
///
/// When several attackers pin the same piece the most valuable piece behind
/// it is reported, so a pin to the king always wins.
pub fn threats(board: &Board, color: Color) -> Vec<ThreatRecord> {
    let enemy = color.opposite();

    board
        .pieces_of(color)
        .filter_map(|(square, piece)| {
            let attackers = attackers_to_square(board, square, enemy);
            if attackers.is_empty() {
                return None;
            }

            let pinned_to = attackers
                .iter()
                .filter_map(|&(attacker_square, _)| piece_behind_pin(board, attacker_square, square))
                .max_by_key(|(_, behind)| behind.kind.value())
                .map(|(behind_square, behind)| PieceRef::new(behind_square, behind));

            let defenders = attackers_to_square(board, square, color)
                .into_iter()
                .map(|(defender_square, defender)| PieceRef::new(defender_square, defender))
                .collect();

            Some(ThreatRecord {
                piece: PieceRef::new(square, piece),
                attackers: attackers
                    .into_iter()
                    .map(|(attacker_square, attacker)| PieceRef::new(attacker_square, attacker))
                    .collect(),
                defenders,
                is_pin: pinned_to.is_some(),
                pinned_to,
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

    fn threat_on(records: &[ThreatRecord], square: Square) -> Option<&ThreatRecord> {
        records.iter().find(|record| record.piece.square == square)
    }

    #[test]
    fn quiet_start_has_no_threats() {
        let board = Board::starting_position();
        assert!(threats(&board, Color::White).is_empty());
        assert!(threats(&board, Color::Black).is_empty());
    }

    #[test]
    fn pin_to_the_king_is_reported_and_broken_by_a_blocker() {
        let game = parse_fen("4k3/4r3/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        let records = threats(game.board(), Color::White);
        let knight = threat_on(&records, sq("e2")).expect("knight is attacked");
        assert!(knight.is_pin);
        assert_eq!(knight.pinned_to.map(|p| (p.square, p.kind)), Some((sq("e1"), PieceKind::King)));
        assert_eq!(knight.attackers.len(), 1);
        assert_eq!(knight.defenders.len(), 1);

        let mut blocked = game.board().clone();
        blocked.set_piece(sq("e4"), Some(Piece::new(PieceKind::Pawn, Color::White)));
        let records = threats(&blocked, Color::White);
        assert!(threat_on(&records, sq("e2")).is_none());
        // The blocker is itself pinned against the knight behind it.
        let pawn = threat_on(&records, sq("e4")).expect("pawn now takes the hit");
        assert!(pawn.is_pin);
        assert_eq!(pawn.pinned_to.map(|p| p.square), Some(sq("e2")));
    }

    #[test]
    fn knight_attack_never_pins() {
        let game = parse_fen("4k3/8/8/8/2n5/8/3Q4/4K3 w - - 0 1").expect("FEN should parse");
        let records = threats(game.board(), Color::White);
        let queen = threat_on(&records, sq("d2")).expect("queen is attacked by the knight");
        assert!(!queen.is_pin);
        assert_eq!(queen.attackers[0].kind, PieceKind::Knight);
        assert_eq!(queen.defenders.len(), 1);
    }

    #[test]
    fn pin_to_the_king_beats_a_lesser_pin() {
        // Rook d8 pins the knight to the king, bishop a7 pins it to the queen.
        let game = parse_fen("3r3k/b7/8/8/3N4/8/5Q2/3K4 w - - 0 1").expect("FEN should parse");
        let records = threats(game.board(), Color::White);
        let knight = threat_on(&records, sq("d4")).expect("knight is attacked");
        assert!(knight.is_pin);
        assert_eq!(knight.attackers.len(), 2);
        assert_eq!(knight.pinned_to.map(|p| (p.square, p.kind)), Some((sq("d1"), PieceKind::King)));
    }
}
