//! Square and move conversions for algebraic coordinates.
//!
//! Files `a`..`h` map to columns 0..7 and ranks `8`..`1` map to rows 0..7, so
//! `a8` is the top-left grid slot and `h1` the bottom-right.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{PieceKind, Square};

/// Convert algebraic notation (for example `"e4"`) to a square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    Square::new(b'8' - rank, file - b'a')
        .ok_or_else(|| ChessErrors::InvalidAlgebraicString(square.to_owned()))
}

/// Convert a square to algebraic notation (for example `"e4"`).
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    format!("{}{}", square.file_char(), square.rank_char())
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}

/// A move typed by a user or produced by an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveText {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

/// Parse `"e2-e4"`, `"e2e4"` or `"e7e8q"` / `"e7-e8=Q"`.
pub fn parse_move_text(text: &str) -> ChessResult<MoveText> {
    let invalid = || ChessErrors::InvalidAlgebraicString(text.to_owned());
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, '-' | '=' | ' '))
        .collect();

    if !cleaned.is_ascii() || !(4..=5).contains(&cleaned.len()) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&cleaned[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&cleaned[2..4]).map_err(|_| invalid())?;
    let promotion = match cleaned[4..].chars().next() {
        None => None,
        Some(ch) => match PieceKind::from_letter(ch) {
            Some(kind @ (PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)) => {
                Some(kind)
            }
            _ => return Err(invalid()),
        },
    };

    Ok(MoveText {
        from,
        to,
        promotion,
    })
}

/// Coordinate form used by the presentation layer, for example `"e2-e4"`.
#[inline]
pub fn dashed_move(from: Square, to: Square) -> String {
    format!("{from}-{to}")
}

/// Compact UCI-style form, for example `"e2e4"` or `"e7e8q"`.
pub fn uci_move(from: Square, to: Square, promotion: Option<PieceKind>) -> String {
    match promotion {
        Some(kind) => format!("{from}{to}{}", kind.letter().to_ascii_lowercase()),
        None => format!("{from}{to}"),
    }
}
