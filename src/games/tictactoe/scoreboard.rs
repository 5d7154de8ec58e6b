//! Score tallies and the history of finished games.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::Mark;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinalOutcome {
    /// `0` completed a line.
    Winner(Mark),
    /// Board filled without a line.
    Draw,
}

impl std::fmt::Display for FinalOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FinalOutcome::Winner(mark) => write!(f, "{} won", mark),
            FinalOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// One completed game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameRecord {
    /// 1-based sequence number within the current tally.
    id: u64,
    outcome: FinalOutcome,
    /// Marks on the board when the game ended.
    moves: usize,
    finished_at: DateTime<Utc>,
}

/// Win and draw counters plus the ordered list of finished games.
///
/// Counters and history only change together, so the counter totals always
/// equal the history length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    monkey_wins: u32,
    banana_wins: u32,
    draws: u32,
    history: Vec<GameRecord>,
}

impl ScoreBoard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished game and returns the stored record.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: FinalOutcome, moves: usize) -> &GameRecord {
        match outcome {
            FinalOutcome::Winner(Mark::Monkey) => self.monkey_wins += 1,
            FinalOutcome::Winner(Mark::Banana) => self.banana_wins += 1,
            FinalOutcome::Draw => self.draws += 1,
        }
        let id = self.history.len() as u64 + 1;
        self.history.push(GameRecord {
            id,
            outcome,
            moves,
            finished_at: Utc::now(),
        });
        &self.history[self.history.len() - 1]
    }

    /// Zeroes every counter and forgets all games.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Wins for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::Monkey => self.monkey_wins,
            Mark::Banana => self.banana_wins,
        }
    }

    /// Draw count.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Number of finished games.
    pub fn total_games(&self) -> usize {
        self.history.len()
    }

    /// Finished games, oldest first.
    pub fn history(&self) -> &[GameRecord] {
        &self.history
    }

    /// Win rate for `mark` as a whole percentage, 0 when no games were played.
    ///
    /// Halves round up, so one win in eight games reports 13%.
    pub fn win_rate_percent(&self, mark: Mark) -> u32 {
        let total = self.total_games();
        if total == 0 {
            return 0;
        }
        (f64::from(self.wins(mark)) / total as f64 * 100.0).round() as u32
    }

    /// Snapshot of the numbers shown in the statistics panel.
    pub fn statistics(&self) -> Statistics {
        Statistics {
            total_games: self.total_games(),
            monkey_wins: self.monkey_wins,
            banana_wins: self.banana_wins,
            draws: self.draws,
            monkey_win_rate: self.win_rate_percent(Mark::Monkey),
            banana_win_rate: self.win_rate_percent(Mark::Banana),
        }
    }
}

/// Flat view of the scoreboard, used for rendering and JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Statistics {
    total_games: usize,
    monkey_wins: u32,
    banana_wins: u32,
    draws: u32,
    monkey_win_rate: u32,
    banana_win_rate: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_are_zero_without_games() {
        let board = ScoreBoard::new();
        assert_eq!(board.win_rate_percent(Mark::Monkey), 0);
        assert_eq!(board.win_rate_percent(Mark::Banana), 0);
    }

    #[test]
    fn rates_round_to_nearest() {
        let mut board = ScoreBoard::new();
        board.record(FinalOutcome::Winner(Mark::Banana), 5);
        board.record(FinalOutcome::Draw, 9);
        board.record(FinalOutcome::Draw, 9);
        // 1/3 = 33.3%
        assert_eq!(board.win_rate_percent(Mark::Banana), 33);
        board.record(FinalOutcome::Winner(Mark::Banana), 6);
        board.record(FinalOutcome::Draw, 9);
        board.record(FinalOutcome::Draw, 9);
        // 2/6 = 33.3%, then 2/8 = 25%
        board.record(FinalOutcome::Draw, 9);
        board.record(FinalOutcome::Draw, 9);
        assert_eq!(board.win_rate_percent(Mark::Banana), 25);
        board.record(FinalOutcome::Winner(Mark::Monkey), 7);
        // 2/9 = 22.2%, 1/9 = 11.1%
        assert_eq!(board.win_rate_percent(Mark::Banana), 22);
        assert_eq!(board.win_rate_percent(Mark::Monkey), 11);
    }

    #[test]
    fn half_rounds_up() {
        let mut board = ScoreBoard::new();
        board.record(FinalOutcome::Winner(Mark::Monkey), 5);
        for _ in 0..7 {
            board.record(FinalOutcome::Draw, 9);
        }
        assert_eq!(board.win_rate_percent(Mark::Monkey), 13);
    }

    #[test]
    fn ids_follow_completion_order() {
        let mut board = ScoreBoard::new();
        board.record(FinalOutcome::Draw, 9);
        let id = *board.record(FinalOutcome::Winner(Mark::Monkey), 5).id();
        assert_eq!(id, 2);
        board.clear();
        assert_eq!(*board.record(FinalOutcome::Draw, 9).id(), 1);
    }
}
