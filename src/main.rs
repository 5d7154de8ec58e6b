//! Monkey vs Banana - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use monkey_banana::{GameSession, Settings, Step, replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings =
        Settings::discover(cli.config.as_deref()).context("Failed to load settings")?;
    if let Some(mark) = cli.starting_mark {
        settings.set_starting_mark(mark);
    }

    match cli.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(args) => {
            if args.reduced_motion {
                settings.set_reduced_motion(true);
            }
            run_tui(settings).await
        }
        Command::Replay { steps, json } => run_replay(settings, &steps, json),
    }
}

/// Plays `steps` without a terminal and prints the report.
fn run_replay(settings: Settings, steps: &[Step], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(steps = steps.len(), "Replaying");

    let mut session = GameSession::with_starting_mark(*settings.starting_mark());
    let report = replay(&mut session, steps);

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", out);
    } else {
        println!("{}", report);
    }
    Ok(())
}
