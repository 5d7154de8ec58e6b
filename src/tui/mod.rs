//! Terminal UI for Monkey vs Banana.

mod app;
mod confetti;
mod input;
mod ui;

use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tokio::time::{Duration, sleep};
use tracing::{error, info, instrument};

pub use app::App;
pub use confetti::Confetti;
pub use input::{Action, action_for, move_cursor};
pub use ui::draw;

use crate::config::Settings;

/// Runs the game in the terminal until the player quits.
pub async fn run_tui(settings: Settings) -> Result<()> {
    // Log to a file so tracing output does not tear the screen.
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting Monkey vs Banana");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&settings, Confetti::new());
    let res = run_app(&mut terminal, &mut app, settings.tick_rate()).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        games = app.session().scores().total_games(),
        "Monkey vs Banana closed"
    );
    res
}

/// Draw, read one key, tick, repeat.
#[instrument(skip_all)]
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App<Confetti>,
    tick_rate: Duration,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| draw(f, app))?;

        if event::poll(tick_rate)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = action_for(key)
        {
            app.handle(action, Instant::now());
        }

        let now = Instant::now();
        app.tick(now, now.duration_since(last_tick));
        last_tick = now;

        if app.should_quit() {
            return Ok(());
        }

        sleep(Duration::from_millis(1)).await;
    }
}
