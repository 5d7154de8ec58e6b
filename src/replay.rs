//! Headless play: feed a list of steps to a session and report the result.

use std::str::FromStr;

use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::games::tictactoe::{Board, GameSession, Outcome, Statistics};

/// One scripted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Play the cell at this index.
    Move(usize),
    /// Start a new game.
    NewGame,
    /// Zero the score.
    ResetScores,
}

/// A step that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognised step '{}': expected a cell index, 'n' or 'r'", input)]
pub struct StepParseError {
    /// The rejected text.
    pub input: String,
}

impl FromStr for Step {
    type Err = StepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "new" => Ok(Step::NewGame),
            "r" | "reset" => Ok(Step::ResetScores),
            other => other.parse::<usize>().map(Step::Move).map_err(|_| StepParseError {
                input: s.to_string(),
            }),
        }
    }
}

/// Final state after a replay.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Board of the last game.
    pub board: Board,
    /// Outcome of the last game.
    pub outcome: Outcome,
    /// Number of moves that were ignored.
    pub ignored_moves: usize,
    /// Session statistics.
    pub statistics: Statistics,
}

/// Runs `steps` against `session` and reports where it ended up.
#[instrument(skip(session, steps), fields(steps = steps.len()))]
pub fn replay(session: &mut GameSession, steps: &[Step]) -> ReplayReport {
    let mut ignored_moves = 0;
    for step in steps {
        match *step {
            Step::Move(index) => {
                if !session.apply_move(index).was_applied() {
                    ignored_moves += 1;
                }
            }
            Step::NewGame => session.reset_board(),
            Step::ResetScores => session.reset_scores(),
        }
    }
    debug!(ignored_moves, "Replay complete");

    ReplayReport {
        board: session.board().clone(),
        outcome: *session.outcome(),
        ignored_moves,
        statistics: session.scores().statistics(),
    }
}

impl std::fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board.display())?;
        writeln!(f)?;
        writeln!(f, "{}", self.outcome)?;
        if self.ignored_moves > 0 {
            writeln!(f, "Ignored moves: {}", self.ignored_moves)?;
        }
        writeln!(f)?;
        writeln!(f, "Total Games: {}", self.statistics.total_games())?;
        writeln!(
            f,
            "Monkey 🐵: {} wins ({}%)",
            self.statistics.monkey_wins(),
            self.statistics.monkey_win_rate()
        )?;
        writeln!(
            f,
            "Banana 🍌: {} wins ({}%)",
            self.statistics.banana_wins(),
            self.statistics.banana_win_rate()
        )?;
        write!(f, "Draws: {}", self.statistics.draws())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_steps() {
        assert_eq!("4".parse::<Step>(), Ok(Step::Move(4)));
        assert_eq!("N".parse::<Step>(), Ok(Step::NewGame));
        assert_eq!("reset".parse::<Step>(), Ok(Step::ResetScores));
        assert!("x".parse::<Step>().is_err());
    }

    #[test]
    fn counts_ignored_moves() {
        let mut session = GameSession::new();
        let report = replay(
            &mut session,
            &[Step::Move(4), Step::Move(4), Step::Move(12)],
        );
        assert_eq!(report.ignored_moves, 2);
        assert_eq!(report.board.filled(), 1);
    }
}
