//! Crate root module declarations for the tactic_board rules engine.
//!
//! The crate is a chess rules engine (legal move generation, special moves,
//! game termination) with a tactical annotation layer on top that describes
//! threats and per-move consequences for an outside decision maker.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod checkpoint;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod move_record;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod piece_rules;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod tactics {
    pub mod annotator;
    pub mod consequences;
    pub mod narrative;
    pub mod pins;
    pub mod records;
    pub mod threats;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod random_move;
    pub mod render_game_state;
}
