//! Command-line interface for monkey_banana.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use monkey_banana::{Mark, Step};

/// Monkey vs Banana - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "monkey_banana")]
#[command(about = "Monkey vs Banana: two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file (defaults to ./monkey_banana.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Mark that opens every game (monkey or banana)
    #[arg(long, global = true)]
    pub starting_mark: Option<Mark>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play(PlayArgs),

    /// Apply moves headlessly and print the result
    Replay {
        /// Cell indices 0-8, `n` for a new game, `r` to reset scores
        #[arg(required = true)]
        steps: Vec<Step>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Options for the terminal game.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Disable the celebration burst
    #[arg(long)]
    pub reduced_motion: bool,
}
