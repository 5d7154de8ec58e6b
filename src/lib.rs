//! Monkey vs Banana - two-player tic-tac-toe with a running score.
//!
//! # Architecture
//!
//! - **Games**: board, rules and the [`GameSession`] that owns all game state
//! - **Celebration**: the one-shot burst fired when a game ends
//! - **Config**: [`Settings`] loaded from TOML
//! - **TUI**: ratatui front end driving a session from key presses
//! - **Replay**: headless play from a list of steps
//!
//! # Example
//!
//! ```
//! use monkey_banana::{GameSession, Mark};
//!
//! let mut session = GameSession::new();
//! for cell in [0, 1, 3, 2, 6] {
//!     session.apply_move(cell);
//! }
//! assert_eq!(session.outcome().winner(), Some(Mark::Monkey));
//! assert_eq!(session.winning_line().map(|l| l.indices()), Some([0, 3, 6]));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod celebration;
mod config;
mod games;
mod replay;
mod tui;

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, Cell, FinalOutcome, GameRecord, GameSession, LINES, Line, Mark, MoveError, MoveOutcome,
    Outcome, Position, ScoreBoard, Statistics, evaluate_outcome, is_draw, is_full, winning_line,
};

// Crate-level exports - Celebration
pub use celebration::{
    Celebration, CelebrationParams, CelebrationTimer, DEFAULT_CLEAR_AFTER, PALETTE,
};

// Crate-level exports - Configuration
pub use config::{CelebrationSettings, ConfigError, DEFAULT_CONFIG_FILE, Settings};

// Crate-level exports - Replay
pub use replay::{ReplayReport, Step, StepParseError, replay};

// Crate-level exports - Terminal UI
pub use tui::{Action, App, Confetti, action_for, draw, move_cursor, run_tui};
