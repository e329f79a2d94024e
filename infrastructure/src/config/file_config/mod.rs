//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod game;
mod logging;
mod output;
mod trivia;
mod tui;

pub use game::FileGameConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use trivia::FileTriviaConfig;
pub use tui::FileTuiConfig;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("game.rounds cannot be 0")]
    ZeroRounds,

    #[error("game.players contains an empty name")]
    EmptyPlayerName,

    #[error("game.players contains '{0}' more than once")]
    DuplicatePlayerName(String),

    #[error("trivia.amount must be between 1 and 50, got {0}")]
    InvalidAmount(u8),

    #[error("trivia.api_url is not a valid URL: {0}")]
    InvalidApiUrl(String),

    #[error("trivia.request_timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("trivia.fetch_timeout_seconds cannot be 0")]
    InvalidFetchTimeout,

    #[error("trivia.bank_capacity cannot be 0")]
    ZeroBankCapacity,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Players and rounds
    pub game: FileGameConfig,
    /// Question API settings
    pub trivia: FileTriviaConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// TUI settings
    pub tui: FileTuiConfig,
    /// Log file locations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.game.rounds == 0 {
            issues.push(ConfigValidationError::ZeroRounds);
        }

        let mut seen = HashSet::new();
        for name in &self.game.players {
            let name = name.trim();
            if name.is_empty() {
                issues.push(ConfigValidationError::EmptyPlayerName);
            } else if !seen.insert(name) {
                issues.push(ConfigValidationError::DuplicatePlayerName(name.to_string()));
            }
        }

        if !(1..=50).contains(&self.trivia.amount) {
            issues.push(ConfigValidationError::InvalidAmount(self.trivia.amount));
        }
        if reqwest::Url::parse(&self.trivia.api_url).is_err() {
            issues.push(ConfigValidationError::InvalidApiUrl(
                self.trivia.api_url.clone(),
            ));
        }
        if self.trivia.request_timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        if self.trivia.fetch_timeout_seconds == Some(0) {
            issues.push(ConfigValidationError::InvalidFetchTimeout);
        }
        if self.trivia.bank_capacity == 0 {
            issues.push(ConfigValidationError::ZeroBankCapacity);
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kingdom_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[game]
players = ["Alice", "Bob", "Carol"]
rounds = 4

[trivia]
amount = 25
fetch_timeout_seconds = 30

[output]
format = "json"
color = false

[tui]
result_display_ms = 1500

[logging]
game_record = "/tmp/kingdom.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.players.len(), 3);
        assert_eq!(config.game.rounds, 4);
        assert_eq!(config.trivia.amount, 25);
        assert_eq!(config.trivia.fetch_timeout_seconds, Some(30));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(config.tui.result_display_ms, 1500);
        assert_eq!(
            config.logging.game_record.as_deref(),
            Some("/tmp/kingdom.jsonl")
        );
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[game]
rounds = 1
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.rounds, 1);
        // Defaults should apply
        assert!(config.game.players.is_empty());
        assert!(config.output.color);
        assert_eq!(config.trivia, FileTriviaConfig::default());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = FileConfig::default();
        config.game.rounds = 0;
        config.game.players = vec!["Ann".into(), " ".into(), "Ann".into()];
        config.trivia.amount = 0;
        config.trivia.api_url = "not a url".into();
        config.trivia.bank_capacity = 0;
        config.trivia.fetch_timeout_seconds = Some(0);

        let issues = config.validate();
        assert!(issues.contains(&ConfigValidationError::ZeroRounds));
        assert!(issues.contains(&ConfigValidationError::EmptyPlayerName));
        assert!(issues.contains(&ConfigValidationError::DuplicatePlayerName("Ann".into())));
        assert!(issues.contains(&ConfigValidationError::InvalidAmount(0)));
        assert!(issues.contains(&ConfigValidationError::InvalidApiUrl("not a url".into())));
        assert!(issues.contains(&ConfigValidationError::ZeroBankCapacity));
        assert!(issues.contains(&ConfigValidationError::InvalidFetchTimeout));
        assert_eq!(issues.len(), 7);
    }
}
