//! 8x8 placement store.
//!
//! `Board` is the only owner of pieces. A piece's square is the grid slot it
//! sits in, so moving a piece is just moving the value between slots and
//! there is no second copy of the position to keep in sync.

use crate::game_state::chess_types::{CastleSide, Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self { grid: [None; 64] }
    }

    /// Standard chess starting position.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for color in Color::BOTH {
            let home = color.home_row();
            let pawns = color.pawn_start_row();
            for (col, kind) in BACK_RANK.iter().enumerate() {
                let col = col as u8;
                board.put(home, col, Piece::new(*kind, color));
                board.put(pawns, col, Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    fn put(&mut self, row: u8, col: u8, piece: Piece) {
        if let Some(square) = Square::new(row, col) {
            self.grid[square.index()] = Some(piece);
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.index()]
    }

    #[inline]
    pub fn piece_at_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.grid[square.index()].as_mut()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.grid[square.index()].is_none()
    }

    /// Colour of the piece on `square`, if any.
    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.grid[square.index()].map(|piece| piece.color)
    }

    /// Replace the content of `square`, returning what was there.
    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.grid[square.index()], piece)
    }

    #[inline]
    pub fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.grid[square.index()].take()
    }

    /// Every occupied square in grid order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.grid.iter().enumerate().filter_map(|(index, slot)| {
            let piece = (*slot)?;
            Square::from_index(index).map(|square| (square, piece))
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// Square of `color`'s king.
    ///
    /// # Panics
    /// When the king is missing. Every reachable position has both kings, so
    /// this can only fire after an engine bug.
    pub fn king_square(&self, color: Color) -> Square {
        match self.find_king(color) {
            Some(square) => square,
            None => panic!("board invariant broken: no {color} king on the board"),
        }
    }

    /// Castling right derived from `has_moved` flags: the king and the rook of
    /// `side` are both on their home squares and have never moved.
    pub fn has_castling_right(&self, color: Color, side: CastleSide) -> bool {
        let home = color.home_row();
        let king_home = Square::new(home, 4).and_then(|sq| self.piece_at(sq));
        let rook_home = Square::new(home, side.rook_col()).and_then(|sq| self.piece_at(sq));

        let unmoved = |piece: Option<Piece>, kind: PieceKind| {
            matches!(piece, Some(p) if p.kind == kind && p.color == color && !p.has_moved)
        };

        unmoved(king_home, PieceKind::King) && unmoved(rook_home, PieceKind::Rook)
    }

    pub fn count_pieces(&self) -> usize {
        self.grid.iter().flatten().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(board.count_pieces(), 32);
        assert_eq!(board.king_square(Color::White), sq("e1"));
        assert_eq!(board.king_square(Color::Black), sq("e8"));

        let d1 = board.piece_at(sq("d1")).expect("queen on d1");
        assert_eq!((d1.kind, d1.color), (PieceKind::Queen, Color::White));
        let a7 = board.piece_at(sq("a7")).expect("pawn on a7");
        assert_eq!((a7.kind, a7.color), (PieceKind::Pawn, Color::Black));
        assert!(board.is_empty(sq("e4")));
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
    }

    #[test]
    fn castling_rights_follow_has_moved() {
        let mut board = Board::starting_position();
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                assert!(board.has_castling_right(color, side));
            }
        }

        if let Some(rook) = board.piece_at_mut(sq("h1")) {
            rook.has_moved = true;
        }
        assert!(!board.has_castling_right(Color::White, CastleSide::KingSide));
        assert!(board.has_castling_right(Color::White, CastleSide::QueenSide));

        if let Some(king) = board.piece_at_mut(sq("e8")) {
            king.has_moved = true;
        }
        assert!(!board.has_castling_right(Color::Black, CastleSide::QueenSide));
    }

    #[test]
    fn set_and_take_return_previous_content() {
        let mut board = Board::empty();
        let knight = Piece::new(PieceKind::Knight, Color::Black);
        assert_eq!(board.set_piece(sq("c6"), Some(knight)), None);
        assert_eq!(board.color_at(sq("c6")), Some(Color::Black));
        assert_eq!(board.take_piece(sq("c6")), Some(knight));
        assert!(board.is_empty(sq("c6")));
        assert_eq!(board.find_king(Color::White), None);
    }

    #[test]
    #[should_panic(expected = "no White king")]
    fn missing_king_is_fatal() {
        Board::empty().king_square(Color::White);
    }
}
