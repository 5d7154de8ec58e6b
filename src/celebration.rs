//! One-shot celebration burst shown when a game ends.
//!
//! The burst is presentation only. Game state never depends on it.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, instrument};

use crate::games::tictactoe::Outcome;

/// Colours of the burst, as hex RGB.
pub const PALETTE: [&str; 5] = ["#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6"];

/// How long a burst stays on screen before it clears itself.
pub const DEFAULT_CLEAR_AFTER: Duration = Duration::from_secs(3);

/// Parameters handed to a [`Celebration`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CelebrationParams {
    /// Number of particles.
    pub count: u16,
    /// Cone width in degrees.
    pub spread: f32,
    /// Launch point as fractions of the drawing area (x, y).
    pub origin: (f32, f32),
    /// Particle colours.
    pub palette: &'static [&'static str],
}

impl CelebrationParams {
    /// Burst for a win.
    pub fn win() -> Self {
        Self {
            count: 120,
            spread: 80.0,
            origin: (0.5, 0.6),
            palette: &PALETTE,
        }
    }

    /// Smaller burst for a draw.
    pub fn draw() -> Self {
        Self {
            count: 80,
            spread: 60.0,
            origin: (0.5, 0.6),
            palette: &PALETTE,
        }
    }

    /// Burst for a terminal outcome, `None` while the game is running.
    pub fn for_outcome(outcome: &Outcome) -> Option<Self> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Won { .. } => Some(Self::win()),
            Outcome::Draw => Some(Self::draw()),
        }
    }
}

/// A visual effect that can be fired and cleared.
pub trait Celebration {
    /// Starts a burst.
    fn burst(&mut self, params: &CelebrationParams);

    /// Removes anything still on screen.
    fn clear(&mut self);

    /// Advances the animation by `dt`.
    fn tick(&mut self, _dt: Duration) {}

    /// True while something is on screen.
    fn is_active(&self) -> bool;
}

/// Deadline after which a running burst must be cleared.
///
/// Time is passed in explicitly so the owner decides which clock to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CelebrationTimer {
    clear_after: Duration,
    deadline: Option<Instant>,
}

impl CelebrationTimer {
    /// Creates an idle timer.
    pub fn new(clear_after: Duration) -> Self {
        Self {
            clear_after,
            deadline: None,
        }
    }

    /// Arms the timer from `now`, replacing any pending deadline.
    #[instrument(skip(self))]
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.clear_after);
    }

    /// Drops a pending deadline.
    pub fn cancel(&mut self) {
        if self.deadline.take().is_some() {
            debug!("Pending celebration clear cancelled");
        }
    }

    /// True while a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true once when `now` reaches the deadline, then disarms.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for CelebrationTimer {
    fn default() -> Self {
        Self::new(DEFAULT_CLEAR_AFTER)
    }
}
