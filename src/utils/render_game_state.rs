//! Terminal-oriented Unicode board renderer.
//!
//! Draws rank 8 at the top, the way White sees the board, with file letters
//! above and below.

use crate::game_state::chess_types::*;

/// Render the board of `game_state` to a Unicode string.
pub fn render_game_state(game_state: &GameState) -> String {
    render_board(game_state.board())
}

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            match Square::new(row, col).and_then(|square| board.piece_at(square)) {
                Some(piece) => out.push(piece.symbol()),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}
