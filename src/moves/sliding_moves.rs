//! Ray scanning shared by bishops, rooks and queens.
//!
//! Destination scans stop on the first occupied square and keep it only when
//! it holds an enemy piece. Attack scans keep the first occupied square
//! whatever its colour, which is what makes defended pieces visible.

use crate::game_state::chess_types::{Board, Color, Piece, Square};

/// A unit step `(d_row, d_col)`.
pub type Direction = (i8, i8);

pub const ORTHOGONAL: [Direction; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ALL_DIRECTIONS: [Direction; 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Squares a slider of `color` on `from` may move to along `directions`.
pub fn slide_destinations(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[Direction],
) -> Vec<Square> {
    let mut out = Vec::with_capacity(14);
    for &(d_row, d_col) in directions {
        let mut cursor = from.offset(d_row, d_col);
        while let Some(square) = cursor {
            match board.color_at(square) {
                None => out.push(square),
                Some(other) => {
                    if other != color {
                        out.push(square);
                    }
                    break;
                }
            }
            cursor = square.offset(d_row, d_col);
        }
    }
    out
}

/// Squares a slider on `from` attacks or defends along `directions`.
pub fn slide_attacks(board: &Board, from: Square, directions: &[Direction]) -> Vec<Square> {
    let mut out = Vec::with_capacity(14);
    for &(d_row, d_col) in directions {
        let mut cursor = from.offset(d_row, d_col);
        while let Some(square) = cursor {
            out.push(square);
            if !board.is_empty(square) {
                break;
            }
            cursor = square.offset(d_row, d_col);
        }
    }
    out
}

/// First occupied square strictly beyond `from` in `direction`.
pub fn first_piece_along(board: &Board, from: Square, direction: Direction) -> Option<(Square, Piece)> {
    let (d_row, d_col) = direction;
    let mut cursor = from.offset(d_row, d_col);
    while let Some(square) = cursor {
        if let Some(piece) = board.piece_at(square) {
            return Some((square, piece));
        }
        cursor = square.offset(d_row, d_col);
    }
    None
}

/// Unit step leading from `from` to `to` when both share a row, column or
/// diagonal.
pub fn direction_between(from: Square, to: Square) -> Option<Direction> {
    if from == to {
        return None;
    }

    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;
    let aligned = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    aligned.then_some((d_row.signum(), d_col.signum()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    #[test]
    fn attacks_include_blockers_of_either_colour() {
        let mut board = Board::empty();
        board.set_piece(sq("a1"), Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set_piece(sq("a4"), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set_piece(sq("d1"), Some(Piece::new(PieceKind::Knight, Color::Black)));

        let attacks = slide_attacks(&board, sq("a1"), &ORTHOGONAL);
        assert!(attacks.contains(&sq("a4")));
        assert!(!attacks.contains(&sq("a5")));
        assert!(attacks.contains(&sq("d1")));
        assert!(!attacks.contains(&sq("e1")));

        let moves = slide_destinations(&board, sq("a1"), Color::White, &ORTHOGONAL);
        assert!(!moves.contains(&sq("a4")));
        assert!(moves.contains(&sq("a3")));
        assert!(moves.contains(&sq("d1")));
        assert_eq!(moves.len(), 5);
    }

    #[test]
    fn directions_between_aligned_squares() {
        assert_eq!(direction_between(sq("a1"), sq("h8")), Some((-1, 1)));
        assert_eq!(direction_between(sq("e1"), sq("e8")), Some((-1, 0)));
        assert_eq!(direction_between(sq("h4"), sq("a4")), Some((0, -1)));
        assert_eq!(direction_between(sq("b1"), sq("c3")), None);
        assert_eq!(direction_between(sq("c3"), sq("c3")), None);
    }

    #[test]
    fn first_piece_along_skips_empty_squares() {
        let mut board = Board::empty();
        let queen = Piece::new(PieceKind::Queen, Color::Black);
        board.set_piece(sq("f6"), Some(queen));
        assert_eq!(first_piece_along(&board, sq("c3"), (-1, 1)), Some((sq("f6"), queen)));
        assert_eq!(first_piece_along(&board, sq("c3"), (1, 1)), None);
    }
}
