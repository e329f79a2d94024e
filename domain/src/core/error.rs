//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    #[error("Duplicate player name: {0}")]
    DuplicatePlayer(String),

    #[error("Cannot {action} while {phase}")]
    InvalidTransition { phase: String, action: String },

    #[error("Game is not complete yet")]
    GameNotComplete,
}

impl DomainError {
    /// Build an [`DomainError::InvalidInput`] from anything displayable
    pub fn invalid_input(message: impl Into<String>) -> Self {
        DomainError::InvalidInput(message.into())
    }

    /// Whether this error was caused by a caller/integration bug rather
    /// than by user-supplied values
    pub fn is_integration_bug(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownPlayer(_) | DomainError::InvalidTransition { .. }
        )
    }
}

/// Convenience alias used across the domain crate
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_player_display() {
        let error = DomainError::UnknownPlayer("Zed".to_string());
        assert_eq!(error.to_string(), "Unknown player: Zed");
    }

    #[test]
    fn test_invalid_transition_display() {
        let error = DomainError::InvalidTransition {
            phase: "selecting difficulty".to_string(),
            action: "select a choice".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot select a choice while selecting difficulty"
        );
    }

    #[test]
    fn test_is_integration_bug() {
        assert!(DomainError::UnknownPlayer("x".into()).is_integration_bug());
        assert!(!DomainError::invalid_input("empty").is_integration_bug());
        assert!(!DomainError::DuplicatePlayer("x".into()).is_integration_bug());
    }
}
