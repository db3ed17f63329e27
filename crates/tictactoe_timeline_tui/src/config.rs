//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Show the move list newest first at startup.
    #[serde(default)]
    history_reversed: bool,

    /// File that receives logs while the terminal UI is running.
    #[serde(default = "default_log_file")]
    log_file: String,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_file() -> String {
    "tictactoe_timeline.log".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            history_reversed: false,
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl TimelineConfig {
    /// Loads configuration from `path`, or defaults if the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if !path.as_ref().exists() {
            debug!("No config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::parse(&content)?;
        info!(history_reversed = config.history_reversed, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Returns a copy with `history_reversed` forced on when `reversed` is set.
    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.history_reversed |= reversed;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = TimelineConfig::parse("").expect("empty config parses");
        assert_eq!(config, TimelineConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = TimelineConfig::parse("history_reversed = true").expect("valid config");
        assert!(*config.history_reversed());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_bad_type_is_error() {
        let err = TimelineConfig::parse("history_reversed = \"yes\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_cli_flag_only_turns_reversal_on() {
        let on = TimelineConfig::parse("history_reversed = true").expect("valid config");
        assert!(*on.with_reversed(false).history_reversed());
        assert!(*TimelineConfig::default().with_reversed(true).history_reversed());
    }
}
