//! Line-oriented console driver for manual play and annotation.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use tactic_board::chess_errors::ChessResult;
use tactic_board::game_state::chess_types::{GameState, MoveOutcome, PieceKind};
use tactic_board::tactics::annotator::TacticalAnnotator;
use tactic_board::tactics::records::to_json;
use tactic_board::utils::render_game_state::render_game_state;

const HELP: &str = "\
commands:
  e2-e4 | e2e4 | e7e8q   play a move
  promote q|r|b|n        resolve a pending promotion
  undo                   take back the last move
  moves                  legal moves of the side to move
  threats                threatened pieces of the side to move (JSON)
  consequences           per-move consequences for the side to move (JSON)
  narrative              plain-text position description
  board                  draw the board
  history                moves played so far
  new                    start a new game
  quit                   leave";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut game = GameState::new();
    let annotator = TacticalAnnotator::default();

    println!("{}\n\n{}", render_game_state(&game), game.status_message());
    println!("type `help` for commands");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if command == "quit" || command == "exit" {
            break;
        }

        match run_command(&mut game, &annotator, command) {
            Ok(reply) => println!("{reply}"),
            Err(err) => println!("error: {err}"),
        }
        stdout.flush().ok();
    }
}

fn run_command(game: &mut GameState, annotator: &TacticalAnnotator, command: &str) -> ChessResult<String> {
    let mut words = command.split_whitespace();
    let head = words.next().unwrap_or_default();

    let reply = match head {
        "help" => HELP.to_owned(),
        "board" => render_game_state(game),
        "narrative" => annotator.narrative(game),
        "moves" => game.legal_move_notations(game.turn()).join(" "),
        "history" => game
            .move_history_notation()
            .iter()
            .enumerate()
            .map(|(ply, text)| format!("{:>3}. {text}", ply + 1))
            .collect::<Vec<_>>()
            .join("\n"),
        "threats" => json_or_message(to_json(&annotator.threats(game, game.turn()))),
        "consequences" => json_or_message(to_json(&annotator.consequences(game, game.turn()))),
        "new" => {
            game.reset();
            format!("{}\n\n{}", render_game_state(game), game.status_message())
        }
        "undo" => {
            game.revert_to_pre_move_state()?;
            format!("{}\n\n{}", render_game_state(game), game.status_message())
        }
        "promote" => {
            let letter = words.next().and_then(|word| word.chars().next()).unwrap_or('q');
            let Some(kind) = PieceKind::from_letter(letter) else {
                return Ok(format!("unknown piece letter '{letter}'"));
            };
            game.promote_pawn(kind)?;
            format!("{}\n\n{}", render_game_state(game), game.status_message())
        }
        _ => {
            // A rejected move must leave the stored take-back untouched.
            let mut next = game.clone();
            next.store_pre_move_state();
            let outcome = next.make_move_from_notation(command)?;
            *game = next;
            match outcome {
                MoveOutcome::PromotionPending { square } => {
                    format!("pawn on {square} reached the last rank: `promote q|r|b|n`")
                }
                MoveOutcome::Completed(_) => {
                    format!("{}\n\n{}", render_game_state(game), game.status_message())
                }
            }
        }
    };

    Ok(reply)
}

fn json_or_message(json: serde_json::Result<String>) -> String {
    json.unwrap_or_else(|err| format!("could not serialize: {err}"))
}
