//! Round limit value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How many rounds a game lasts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundLimit {
    /// A fixed, positive number of rounds
    Fixed(u32),
    /// Rounds keep coming until the game is cancelled
    Unlimited,
}

impl RoundLimit {
    /// A fixed limit; zero rounds is [`DomainError::InvalidInput`]
    pub fn fixed(rounds: u32) -> Result<Self, DomainError> {
        if rounds == 0 {
            return Err(DomainError::invalid_input(
                "number of rounds must be positive",
            ));
        }
        Ok(RoundLimit::Fixed(rounds))
    }

    /// Whether the game runs until cancelled
    pub fn is_unlimited(&self) -> bool {
        matches!(self, RoundLimit::Unlimited)
    }

    /// Round target before any round has been played
    pub fn initial_target(&self) -> u32 {
        match self {
            RoundLimit::Fixed(n) => *n,
            RoundLimit::Unlimited => 1,
        }
    }
}

impl fmt::Display for RoundLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundLimit::Fixed(1) => write!(f, "1 round"),
            RoundLimit::Fixed(n) => write!(f, "{n} rounds"),
            RoundLimit::Unlimited => write!(f, "unlimited rounds"),
        }
    }
}

impl FromStr for RoundLimit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("unlimited") {
            return Ok(RoundLimit::Unlimited);
        }
        let rounds = trimmed.parse::<u32>().map_err(|_| {
            DomainError::invalid_input(format!("'{trimmed}' is not a positive number of rounds"))
        })?;
        Self::fixed(rounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_rejects_zero() {
        assert!(RoundLimit::fixed(0).is_err());
        assert_eq!(RoundLimit::fixed(3).unwrap(), RoundLimit::Fixed(3));
    }

    #[test]
    fn test_initial_target() {
        assert_eq!(RoundLimit::Fixed(5).initial_target(), 5);
        assert_eq!(RoundLimit::Unlimited.initial_target(), 1);
    }

    #[test]
    fn test_parse() {
        assert_eq!("4".parse::<RoundLimit>().unwrap(), RoundLimit::Fixed(4));
        assert_eq!(
            "Unlimited".parse::<RoundLimit>().unwrap(),
            RoundLimit::Unlimited
        );
        assert!("-2".parse::<RoundLimit>().is_err());
        assert!("0".parse::<RoundLimit>().is_err());
        assert!("lots".parse::<RoundLimit>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(RoundLimit::Fixed(1).to_string(), "1 round");
        assert_eq!(RoundLimit::Fixed(3).to_string(), "3 rounds");
        assert_eq!(RoundLimit::Unlimited.to_string(), "unlimited rounds");
    }
}
