//! The game session: board, turn, outcome and running score.

use tracing::{debug, info, instrument};

use super::action::{MoveError, MoveOutcome};
use super::rules::{Line, Outcome, evaluate_outcome};
use super::scoreboard::{FinalOutcome, ScoreBoard};
use super::{Board, Mark, Position};
use crate::celebration::CelebrationParams;

/// All state of one play session.
///
/// The board is locked once the outcome leaves [`Outcome::InProgress`] and
/// stays locked until [`GameSession::reset_board`].
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    board: Board,
    current: Mark,
    starting: Mark,
    outcome: Outcome,
    scores: ScoreBoard,
}

impl GameSession {
    /// New session where the monkey moves first.
    pub fn new() -> Self {
        Self::with_starting_mark(Mark::Monkey)
    }

    /// New session where `starting` moves first in every game.
    #[instrument]
    pub fn with_starting_mark(starting: Mark) -> Self {
        Self {
            board: Board::new(),
            current: starting,
            starting,
            outcome: Outcome::InProgress,
            scores: ScoreBoard::new(),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move (or the mark that made the final move once the game ended).
    pub fn current_player(&self) -> Mark {
        self.current
    }

    /// Mark that opens every game.
    pub fn starting_mark(&self) -> Mark {
        self.starting
    }

    /// Current outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Winning line of a won game.
    pub fn winning_line(&self) -> Option<Line> {
        self.outcome.line()
    }

    /// True once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Running score for this session.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Plays the current mark at `index`.
    ///
    /// Moves onto an occupied cell, off the board, or after the game ended
    /// are ignored and leave the session untouched.
    #[instrument(skip(self), fields(player = ?self.current))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        match self.try_apply_move(index) {
            Ok(result) => result,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                MoveOutcome::Ignored
            }
        }
    }

    /// Plays `position`; see [`GameSession::apply_move`].
    pub fn apply_position(&mut self, position: Position) -> MoveOutcome {
        self.apply_move(position.to_index())
    }

    /// Validating core of [`GameSession::apply_move`].
    fn try_apply_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if !self.board.is_empty(index) {
            return Err(MoveError::CellOccupied(position));
        }

        self.board.place(index, self.current);
        let outcome = evaluate_outcome(&self.board);

        let Some(celebration) = CelebrationParams::for_outcome(&outcome) else {
            self.current = self.current.opponent();
            debug!(position = %position, next = ?self.current, "Move applied");
            return Ok(MoveOutcome::Continued { next: self.current });
        };

        self.outcome = outcome;
        let final_outcome = match outcome.winner() {
            Some(mark) => FinalOutcome::Winner(mark),
            None => FinalOutcome::Draw,
        };
        let moves = self.board.filled();
        let record = self.scores.record(final_outcome, moves);
        info!(
            game = *record.id(),
            outcome = %final_outcome,
            moves,
            "Game finished"
        );

        Ok(MoveOutcome::Finished {
            outcome,
            celebration,
        })
    }

    /// Clears the board for a new game. Scores and history are kept.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        self.board = Board::new();
        self.current = self.starting;
        self.outcome = Outcome::InProgress;
        info!(starting = ?self.starting, "New game");
    }

    /// Zeroes the score and forgets the history. The board is kept.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores.clear();
        info!("Scores reset");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_board_index_is_ignored() {
        let mut session = GameSession::new();
        assert_eq!(session.apply_move(9), MoveOutcome::Ignored);
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn rejection_reasons() {
        let mut session = GameSession::new();
        assert_eq!(session.try_apply_move(42), Err(MoveError::OutOfBounds(42)));
        session.apply_move(4);
        assert_eq!(
            session.try_apply_move(4),
            Err(MoveError::CellOccupied(Position::Center))
        );
        for index in [0, 1, 8] {
            session.apply_move(index);
        }
        // Monkey: 4, 1; Banana: 0, 8 -> not over yet, finish the middle column.
        session.apply_move(7);
        assert!(session.is_over());
        assert_eq!(session.try_apply_move(2), Err(MoveError::GameOver));
    }
}
