//! ScoreBoard entity and its read-only snapshot
//!
//! The board is the only mutable score store in a game. Everything that
//! reads scores after the fact (ranking, the transcript, the UI) works on a
//! [`ScoreSnapshot`] so it cannot disturb the running totals.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One player's running score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player: String,
    pub score: u32,
}

impl PlayerScore {
    pub fn new(player: impl Into<String>, score: u32) -> Self {
        Self {
            player: player.into(),
            score,
        }
    }
}

/// Per-player scores for one game, kept in player input order
///
/// Scores start at zero and only ever grow through [`ScoreBoard::award`].
#[derive(Debug, Clone)]
pub struct ScoreBoard {
    entries: Vec<PlayerScore>,
}

impl ScoreBoard {
    /// Create a board with every player at zero
    ///
    /// Names are trimmed. An empty list or a blank name is
    /// [`DomainError::InvalidInput`]; a repeated name is
    /// [`DomainError::DuplicatePlayer`].
    pub fn new<I, S>(players: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for name in players {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(DomainError::invalid_input("player name cannot be empty"));
            }
            if !seen.insert(name.to_string()) {
                return Err(DomainError::DuplicatePlayer(name.to_string()));
            }
            entries.push(PlayerScore::new(name, 0));
        }

        if entries.is_empty() {
            return Err(DomainError::invalid_input(
                "a game needs at least one player",
            ));
        }

        Ok(Self { entries })
    }

    /// Add `points` to `player` and return the new total
    pub fn award(&mut self, player: &str, points: u32) -> Result<u32, DomainError> {
        if points == 0 {
            return Err(DomainError::invalid_input("awarded points must be positive"));
        }
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.player == player)
            .ok_or_else(|| DomainError::UnknownPlayer(player.to_string()))?;
        entry.score = entry.score.saturating_add(points);
        Ok(entry.score)
    }

    /// Current score of `player`, or `None` for a name not on the board
    pub fn score(&self, player: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.player == player)
            .map(|e| e.score)
    }

    /// Player names in input order
    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.player.as_str())
    }

    /// Player at `index` in input order; the round controller walks turns with this
    pub fn player_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.player.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every player's score
    pub fn total_points(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.score)).sum()
    }

    /// Copy the current scores
    ///
    /// Taking a snapshot never changes the board, so repeated calls without an
    /// intervening award return equal snapshots.
    pub fn snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            entries: self.entries.clone(),
        }
    }
}

/// Immutable copy of a [`ScoreBoard`], in player input order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreSnapshot {
    entries: Vec<PlayerScore>,
}

impl ScoreSnapshot {
    /// Build a snapshot directly from `(name, score)` pairs
    ///
    /// Used for ranking scores that did not come from a live board.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(player, score)| PlayerScore::new(player, score))
                .collect(),
        }
    }

    /// Score recorded for `player`
    pub fn get(&self, player: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.player == player)
            .map(|e| e.score)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlayerScore> {
        self.entries.iter()
    }

    /// Entries in player input order
    pub fn entries(&self) -> &[PlayerScore] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ScoreSnapshot {
    type Item = &'a PlayerScore;
    type IntoIter = std::slice::Iter<'a, PlayerScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_initializes_scores_to_zero() {
        let board = ScoreBoard::new(["Alice", "Bob"]).unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board.score("Alice"), Some(0));
        assert_eq!(board.score("Bob"), Some(0));
        assert_eq!(board.players().collect::<Vec<_>>(), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_new_rejects_empty_player_list() {
        let result = ScoreBoard::new(Vec::<String>::new());
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_new_rejects_blank_and_duplicate_names() {
        assert!(matches!(
            ScoreBoard::new(["Alice", "  "]),
            Err(DomainError::InvalidInput(_))
        ));
        assert_eq!(
            ScoreBoard::new(["Alice", " Alice "]).unwrap_err(),
            DomainError::DuplicatePlayer("Alice".to_string())
        );
    }

    #[test]
    fn test_award_repeatedly_sums_exactly() {
        let mut board = ScoreBoard::new(["Alice"]).unwrap();
        let mut last = 0;
        for _ in 0..5 {
            let total = board.award("Alice", 3).unwrap();
            assert!(total > last);
            last = total;
        }
        assert_eq!(board.score("Alice"), Some(15));
        assert_eq!(board.total_points(), 15);
    }

    #[test]
    fn test_award_unknown_player() {
        let mut board = ScoreBoard::new(["Alice"]).unwrap();
        assert_eq!(
            board.award("Mallory", 1).unwrap_err(),
            DomainError::UnknownPlayer("Mallory".to_string())
        );
    }

    #[test]
    fn test_award_zero_points_rejected() {
        let mut board = ScoreBoard::new(["Alice"]).unwrap();
        assert!(matches!(
            board.award("Alice", 0),
            Err(DomainError::InvalidInput(_))
        ));
        assert_eq!(board.score("Alice"), Some(0));
    }

    #[test]
    fn test_snapshot_is_idempotent_and_detached() {
        let mut board = ScoreBoard::new(["Alice", "Bob"]).unwrap();
        board.award("Bob", 2).unwrap();

        let first = board.snapshot();
        let second = board.snapshot();
        assert_eq!(first, second);

        board.award("Alice", 1).unwrap();
        assert_eq!(first.get("Alice"), Some(0));
        assert_eq!(board.snapshot().get("Alice"), Some(1));
    }

    #[test]
    fn test_snapshot_serializes_as_list() {
        let snapshot = ScoreSnapshot::from_pairs([("Alice", 3)]);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"[{"player":"Alice","score":3}]"#);
    }
}
