//! Match configuration loaded from TOML.

use crate::bots::BotKind;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How a finished game is printed.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary with the final board.
    #[default]
    Text,
    /// The game result as JSON.
    Json,
}

/// Which bots play, and how the result is reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Bot playing X (moves first).
    bot_a: BotKind,
    /// Bot playing O.
    bot_b: BotKind,
    /// Output format.
    output: OutputFormat,
}

impl MatchConfig {
    /// Creates a configuration for the given bots with text output.
    #[instrument]
    pub fn new(bot_a: BotKind, bot_b: BotKind) -> Self {
        Self {
            bot_a,
            bot_b,
            output: OutputFormat::default(),
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(bot_a = %config.bot_a, bot_b = %config.bot_b, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces any field for which an override is given.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        bot_a: Option<BotKind>,
        bot_b: Option<BotKind>,
        output: Option<OutputFormat>,
    ) -> Self {
        if let Some(bot_a) = bot_a {
            self.bot_a = bot_a;
        }
        if let Some(bot_b) = bot_b {
            self.bot_b = bot_b;
        }
        if let Some(output) = output {
            self.output = output;
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
