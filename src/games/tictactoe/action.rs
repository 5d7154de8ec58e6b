//! Move results and rejection reasons.

use super::{Mark, Outcome, Position};
use crate::celebration::CelebrationParams;

/// Why a move was not applied.
///
/// Rejected moves are no-ops for the player; this type only exists so the
/// session can log what was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Index is not 0-8.
    #[display("Cell index {} is off the board", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The current game has already ended.
    #[display("Game is already over")]
    GameOver,
}

/// What happened when a move was submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// The move was rejected and nothing changed.
    Ignored,
    /// The mark was placed and play passes to `next`.
    Continued {
        /// Mark to move next.
        next: Mark,
    },
    /// The mark was placed and ended the game.
    Finished {
        /// Terminal outcome (win or draw).
        outcome: Outcome,
        /// Burst to show for this ending.
        celebration: CelebrationParams,
    },
}

impl MoveOutcome {
    /// True unless the move was ignored.
    pub fn was_applied(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored)
    }
}
