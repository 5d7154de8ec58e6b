//! Runtime settings loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::games::tictactoe::Mark;

/// File picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "monkey_banana.toml";

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Mark that opens every game.
    starting_mark: Mark,

    /// Where the TUI writes its log.
    log_file: PathBuf,

    /// Redraw interval in milliseconds.
    tick_rate_ms: u64,

    /// Burst behaviour.
    celebration: CelebrationSettings,
}

/// `[celebration]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct CelebrationSettings {
    /// Fire a burst when a game ends.
    enabled: bool,

    /// Suppress motion even when enabled.
    reduced_motion: bool,

    /// Milliseconds before a burst clears itself.
    clear_after_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_mark: Mark::Monkey,
            log_file: PathBuf::from("monkey_banana.log"),
            tick_rate_ms: 33,
            celebration: CelebrationSettings::default(),
        }
    }
}

impl Default for CelebrationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            reduced_motion: false,
            clear_after_ms: 3000,
        }
    }
}

impl CelebrationSettings {
    /// Whether a burst should actually be drawn.
    pub fn shows_motion(&self) -> bool {
        self.enabled && !self.reduced_motion
    }

    /// Delay before a burst clears itself.
    pub fn clear_after(&self) -> Duration {
        Duration::from_millis(self.clear_after_ms)
    }
}

impl Settings {
    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let settings = Self::from_toml(&content)?;
        info!(starting_mark = ?settings.starting_mark, "Config loaded");
        Ok(settings)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else defaults.
    ///
    /// An explicit path that cannot be read is an error.
    #[instrument]
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the starting mark.
    pub fn set_starting_mark(&mut self, mark: Mark) {
        self.starting_mark = mark;
    }

    /// Turns on reduced motion.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.celebration.reduced_motion = reduced;
    }

    /// Redraw interval.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
