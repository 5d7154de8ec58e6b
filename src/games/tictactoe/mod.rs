mod action;
mod position;
mod rules;
mod scoreboard;
mod session;
mod types;

pub use action::{MoveError, MoveOutcome};
pub use position::Position;
pub use rules::{LINES, Line, Outcome, evaluate_outcome, is_draw, is_full, winning_line};
pub use scoreboard::{FinalOutcome, GameRecord, ScoreBoard, Statistics};
pub use session::GameSession;
pub use types::{Board, Cell, Mark};
