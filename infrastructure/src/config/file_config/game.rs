//! Game configuration from TOML (`[game]` section)

use kingdom_domain::{DomainError, RoundLimit};
use serde::{Deserialize, Serialize};

/// Raw game configuration from TOML
///
/// # Example
///
/// ```toml
/// [game]
/// players = ["Alice", "Bob"]
/// rounds = 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Player names used when none are given on the command line
    pub players: Vec<String>,
    /// Number of rounds for a regular game
    pub rounds: u32,
    /// Invalid difficulty entries tolerated before defaulting to easy
    pub max_invalid_difficulty_attempts: u32,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            rounds: 3,
            max_invalid_difficulty_attempts: 3,
        }
    }
}

impl FileGameConfig {
    pub fn round_limit(&self) -> Result<RoundLimit, DomainError> {
        RoundLimit::fixed(self.rounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_section_deserialize() {
        let toml_str = r#"
[game]
players = ["Ada", "Grace"]
rounds = 2
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.players, vec!["Ada", "Grace"]);
        assert_eq!(config.game.round_limit().unwrap(), RoundLimit::Fixed(2));
        assert_eq!(config.game.max_invalid_difficulty_attempts, 3);
    }
}
