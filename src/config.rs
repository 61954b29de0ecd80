//! Shell configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the terminal shell.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Name suggested for the first player (X).
    #[serde(default = "default_player_a")]
    player_a: String,

    /// Name suggested for the second player (O).
    #[serde(default = "default_player_b")]
    player_b: String,

    /// Show 1-based cell numbers in empty cells.
    #[serde(default = "default_show_hints")]
    show_hints: bool,
}

#[instrument]
fn default_player_a() -> String {
    "Player 1".to_string()
}

#[instrument]
fn default_player_b() -> String {
    "Player 2".to_string()
}

#[instrument]
fn default_show_hints() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            player_a: default_player_a(),
            player_b: default_player_b(),
            show_hints: default_show_hints(),
        }
    }
}

impl ShellConfig {
    /// Loads configuration from a TOML file. Missing fields take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player_a = %config.player_a,
            player_b = %config.player_b,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces the player names where an override is given.
    pub fn with_names(mut self, player_a: Option<String>, player_b: Option<String>) -> Self {
        if let Some(name) = player_a {
            self.player_a = name;
        }
        if let Some(name) = player_b {
            self.player_b = name;
        }
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
