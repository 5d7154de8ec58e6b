//! Application state and logic.

use std::time::{Duration, Instant};

use tracing::{debug, info, instrument};

use super::input::{Action, move_cursor};
use crate::celebration::{Celebration, CelebrationTimer};
use crate::config::{CelebrationSettings, Settings};
use crate::games::tictactoe::{GameSession, MoveOutcome, Position};

/// Main application state.
///
/// Owns the [`GameSession`] and the presentation state around it: cursor,
/// celebration effect and its clear timer.
#[derive(Debug)]
pub struct App<C> {
    session: GameSession,
    cursor: Position,
    effect: C,
    timer: CelebrationTimer,
    celebration: CelebrationSettings,
    show_history: bool,
    should_quit: bool,
}

impl<C: Celebration> App<C> {
    /// Creates an app from settings with the given effect.
    #[instrument(skip_all)]
    pub fn new(settings: &Settings, effect: C) -> Self {
        let celebration = *settings.celebration();
        Self {
            session: GameSession::with_starting_mark(*settings.starting_mark()),
            cursor: Position::Center,
            effect,
            timer: CelebrationTimer::new(celebration.clear_after()),
            celebration,
            show_history: false,
            should_quit: false,
        }
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The celebration effect.
    pub fn effect(&self) -> &C {
        &self.effect
    }

    /// True while the effect is waiting to be cleared.
    pub fn celebration_pending(&self) -> bool {
        self.timer.is_armed()
    }

    /// Whether the recent games panel is shown.
    pub fn show_history(&self) -> bool {
        self.show_history
    }

    /// True once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one player action at time `now`.
    #[instrument(skip(self, now))]
    pub fn handle(&mut self, action: Action, now: Instant) {
        match action {
            Action::Cursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::PlayCursor => self.play(self.cursor, now),
            Action::Play(position) => {
                self.cursor = position;
                self.play(position, now);
            }
            Action::NewGame => self.new_game(),
            Action::ResetScores => self.session.reset_scores(),
            Action::ToggleHistory => self.show_history = !self.show_history,
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Advances the effect and clears it once its time is up.
    pub fn tick(&mut self, now: Instant, dt: Duration) {
        self.effect.tick(dt);
        if self.timer.poll(now) {
            debug!("Clearing celebration");
            self.effect.clear();
        }
    }

    fn play(&mut self, position: Position, now: Instant) {
        if let MoveOutcome::Finished {
            outcome,
            celebration,
        } = self.session.apply_position(position)
        {
            info!(%outcome, "Game over");
            if self.celebration.shows_motion() {
                self.effect.burst(&celebration);
                self.timer.arm(now);
            }
        }
    }

    fn new_game(&mut self) {
        self.timer.cancel();
        self.effect.clear();
        self.session.reset_board();
        self.cursor = Position::Center;
    }
}

/// Recorded calls to a [`Celebration`], for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingCelebration {
    pub bursts: Vec<crate::celebration::CelebrationParams>,
    pub clears: usize,
    pub active: bool,
}

#[cfg(test)]
impl Celebration for RecordingCelebration {
    fn burst(&mut self, params: &crate::celebration::CelebrationParams) {
        self.bursts.push(params.clone());
        self.active = true;
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::celebration::CelebrationParams;
    use crossterm::event::KeyCode;

    fn app() -> App<RecordingCelebration> {
        App::new(&Settings::default(), RecordingCelebration::default())
    }

    fn play_all(app: &mut App<RecordingCelebration>, cells: &[usize], now: Instant) {
        for &cell in cells {
            let position = Position::from_index(cell).unwrap();
            app.handle(Action::Play(position), now);
        }
    }

    #[test]
    fn win_fires_one_burst_and_clears_after_delay() {
        let mut app = app();
        let start = Instant::now();
        play_all(&mut app, &[0, 1, 3, 2, 6], start);

        assert_eq!(app.effect().bursts, vec![CelebrationParams::win()]);
        assert!(app.celebration_pending());

        app.tick(start + Duration::from_millis(2999), Duration::ZERO);
        assert!(app.effect().is_active());

        app.tick(start + Duration::from_secs(3), Duration::ZERO);
        assert!(!app.effect().is_active());
        assert!(!app.celebration_pending());
    }

    #[test]
    fn new_game_cancels_pending_clear() {
        let mut app = app();
        let start = Instant::now();
        play_all(&mut app, &[0, 1, 3, 2, 6], start);
        app.handle(Action::NewGame, start);

        assert!(!app.celebration_pending());
        let clears = app.effect().clears;
        app.tick(start + Duration::from_secs(5), Duration::ZERO);
        assert_eq!(app.effect().clears, clears);
    }

    #[test]
    fn reduced_motion_skips_burst() {
        let mut settings = Settings::default();
        settings.set_reduced_motion(true);
        let mut app = App::new(&settings, RecordingCelebration::default());
        play_all(&mut app, &[0, 1, 3, 2, 6], Instant::now());

        assert!(app.session().is_over());
        assert!(app.effect().bursts.is_empty());
        assert!(!app.celebration_pending());
    }

    #[test]
    fn draw_uses_draw_burst() {
        let mut app = app();
        play_all(&mut app, &[0, 1, 2, 4, 3, 5, 7, 6, 8], Instant::now());
        assert_eq!(app.effect().bursts, vec![CelebrationParams::draw()]);
    }

    #[test]
    fn cursor_play_uses_cursor_cell() {
        let mut app = app();
        app.handle(Action::Cursor(KeyCode::Up), Instant::now());
        app.handle(Action::PlayCursor, Instant::now());
        assert!(!app.session().board().is_empty(Position::TopCenter.to_index()));
    }
}
