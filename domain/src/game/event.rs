//! Input events consumed by the round state machine
//!
//! Front ends validate raw input and hand the controller only these typed
//! events, so the core never sees malformed difficulty names or indices.

use crate::core::difficulty::Difficulty;
use crate::core::question::ChoiceIndex;
use serde::{Deserialize, Serialize};

/// Where a cancelled game should return to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CancelTarget {
    /// Back to the main menu; the process keeps running
    Menu,
    /// Exit the whole program
    Quit,
}

impl CancelTarget {
    /// Whether this target ends the program rather than the game
    pub fn exits_process(&self) -> bool {
        matches!(self, CancelTarget::Quit)
    }
}

impl std::fmt::Display for CancelTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CancelTarget::Menu => write!(f, "menu"),
            CancelTarget::Quit => write!(f, "quit"),
        }
    }
}

/// A validated, typed input from a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum GameEvent {
    DifficultyChosen(Difficulty),
    ChoiceSelected(ChoiceIndex),
    Cancel(CancelTarget),
}

impl GameEvent {
    /// Short description used in transition errors
    pub fn action(&self) -> &'static str {
        match self {
            GameEvent::DifficultyChosen(_) => "choose a difficulty",
            GameEvent::ChoiceSelected(_) => "select an answer",
            GameEvent::Cancel(_) => "cancel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_target_exits_process() {
        assert!(CancelTarget::Quit.exits_process());
        assert!(!CancelTarget::Menu.exits_process());
    }

    #[test]
    fn test_event_serialization() {
        let json = serde_json::to_string(&GameEvent::DifficultyChosen(Difficulty::Hard)).unwrap();
        assert_eq!(json, r#"{"type":"difficulty_chosen","value":"hard"}"#);

        let event: GameEvent =
            serde_json::from_str(r#"{"type":"cancel","value":"menu"}"#).unwrap();
        assert_eq!(event, GameEvent::Cancel(CancelTarget::Menu));
    }
}
