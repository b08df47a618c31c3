//! Annotation records handed to the decision layer.
//!
//! All records serialize to JSON; see [`to_json`].

use std::fmt;

use serde::Serialize;

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

/// A piece identified by where it stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PieceRef {
    pub square: Square,
    pub kind: PieceKind,
    pub color: Color,
}

impl PieceRef {
    #[inline]
    pub fn new(square: Square, piece: Piece) -> Self {
        Self {
            square,
            kind: piece.kind,
            color: piece.color,
        }
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.kind.value()
    }
}

impl fmt::Display for PieceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.color, self.kind, self.square)
    }
}

/// An own piece that at least one enemy piece attacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreatRecord {
    pub piece: PieceRef,
    pub attackers: Vec<PieceRef>,
    /// Own pieces covering the threatened square.
    pub defenders: Vec<PieceRef>,
    pub is_pin: bool,
    /// The friendly piece standing behind `piece` on a pinning ray.
    pub pinned_to: Option<PieceRef>,
}

/// `pinner` attacks `pinned`, and `pinned_to` stands right behind it on the
/// same ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PinRecord {
    pub pinner: PieceRef,
    pub pinned: PieceRef,
    pub pinned_to: PieceRef,
}

/// What a single legal move would do, found by playing it on a scratch board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveConsequence {
    pub from: Square,
    pub to: Square,
    /// The mover as it stood before the move.
    pub piece: PieceRef,
    /// `"e2-e4"`, with `"=Q"` appended for a simulated promotion.
    pub notation: String,
    /// Piece a promoting pawn was simulated as.
    pub promotion: Option<PieceKind>,
    pub captured: Option<PieceRef>,
    /// Enemy pieces the mover attacks from its new square.
    pub attacked_after: Vec<PieceRef>,
    pub is_fork: bool,
    pub is_check: bool,
    pub is_checkmate: bool,
    /// Enemy pieces that could legally capture on `to` straight away.
    pub retaliation: Vec<PieceRef>,
    /// Own pieces, other than the mover, covering `to`.
    pub defenders: Vec<PieceRef>,
    pub creates_pin: bool,
    pub pins: Vec<PinRecord>,
}

impl MoveConsequence {
    /// The mover can be taken and nothing covers it.
    pub fn is_hanging(&self) -> bool {
        !self.retaliation.is_empty() && self.defenders.is_empty()
    }
}

/// Pretty JSON for any record or list of records.
pub fn to_json<T: Serialize + ?Sized>(records: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}
