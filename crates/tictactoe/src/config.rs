//! Game configuration.

use clap::ValueEnum;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::Mark;
use tracing::{debug, info, instrument};

/// Which side takes the first move in a new game.
///
/// Defaults to [`FirstPlayer::Human`] so the player moves first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum, Display,
)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The human moves first.
    #[default]
    #[display("human")]
    Human,
    /// The computer moves first.
    #[display("computer")]
    Computer,
}

impl FirstPlayer {
    /// Returns the mark that moves first.
    pub fn mark(self) -> Mark {
        match self {
            Self::Human => Mark::Player,
            Self::Computer => Mark::Opponent,
        }
    }
}

/// Configuration for an interactive game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Who takes the first move.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Print search statistics after each computer move.
    #[serde(default)]
    show_stats: bool,
}

impl GameConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(first_player: FirstPlayer, show_stats: bool) -> Self {
        Self {
            first_player,
            show_stats,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(first_player = %config.first_player, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of file or default values.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, first_player: Option<FirstPlayer>, show_stats: bool) -> Self {
        if let Some(first) = first_player {
            self.first_player = first;
        }
        self.show_stats |= show_stats;
        self
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
