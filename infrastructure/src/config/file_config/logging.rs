//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for diagnostic log files (TUI mode)
    pub directory: Option<String>,
    /// JSONL game transcript path
    pub game_record: Option<String>,
}

impl FileLoggingConfig {
    /// Configured log directory, with a leading `~` expanded
    pub fn directory_path(&self) -> Option<PathBuf> {
        self.directory.as_deref().map(expand_home)
    }

    pub fn game_record_path(&self) -> Option<PathBuf> {
        self.game_record.as_deref().map(expand_home)
    }
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paths_untouched() {
        let config = FileLoggingConfig {
            directory: Some("/var/log/kingdom".into()),
            game_record: None,
        };
        assert_eq!(
            config.directory_path(),
            Some(PathBuf::from("/var/log/kingdom"))
        );
        assert!(config.game_record_path().is_none());
    }

    #[test]
    fn test_home_is_expanded() {
        let config = FileLoggingConfig {
            directory: None,
            game_record: Some("~/games.jsonl".into()),
        };
        let path = config.game_record_path().unwrap();
        assert!(path.ends_with("games.jsonl"));
        if dirs::home_dir().is_some() {
            assert!(!path.starts_with("~"));
        }
    }
}
