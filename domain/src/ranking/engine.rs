//! RankingEngine and its output types
//!
//! Ranking uses competition numbering: tied players share a rank and the
//! next group skips ahead (1, 1, 3). The engine is a pure function of a
//! [`ScoreSnapshot`].

use super::language::{join_names, ordinal};
use crate::core::error::DomainError;
use crate::scoring::{PlayerScore, ScoreSnapshot};
use serde::{Deserialize, Serialize};

/// One rank group: every player sharing `score`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    /// 1-based competition rank
    pub rank: usize,
    /// Tied players, in input order
    pub players: Vec<String>,
    pub score: u32,
}

impl RankEntry {
    /// `1st`, `2nd`, ...
    pub fn ordinal(&self) -> String {
        ordinal(self.rank)
    }

    /// `A`, `A and B`, `A, B, and C`
    pub fn players_label(&self) -> String {
        join_names(&self.players)
    }

    /// Whether more than one player shares this rank
    pub fn is_tie(&self) -> bool {
        self.players.len() > 1
    }

    /// `1st: Alice and Bob with 10 points`
    pub fn summary(&self) -> String {
        let unit = if self.score == 1 { "point" } else { "points" };
        format!(
            "{}: {} with {} {}",
            self.ordinal(),
            self.players_label(),
            self.score,
            unit
        )
    }
}

/// Who won the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "players", rename_all = "lowercase")]
pub enum Winners {
    Sole(String),
    Joint(Vec<String>),
}

impl Winners {
    /// Winner names in input order
    pub fn names(&self) -> Vec<&str> {
        match self {
            Winners::Sole(name) => vec![name.as_str()],
            Winners::Joint(names) => names.iter().map(String::as_str).collect(),
        }
    }

    pub fn is_joint(&self) -> bool {
        matches!(self, Winners::Joint(_))
    }

    /// Closing line announcing the winner or joint winners
    pub fn message(&self) -> String {
        match self {
            Winners::Sole(name) => {
                format!("Congratulations {name}! You are the overall winner!")
            }
            Winners::Joint(names) => format!(
                "Congratulations {}! You are all joint winners!",
                join_names(names)
            ),
        }
    }
}

/// Final ranking of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub entries: Vec<RankEntry>,
    pub winners: Winners,
}

impl Standings {
    /// Rank of `player`, if present
    pub fn rank_of(&self, player: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.players.iter().any(|p| p == player))
            .map(|e| e.rank)
    }

    /// One summary line per rank group, best first
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(RankEntry::summary).collect()
    }
}

/// Stateless ranking service
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingEngine;

impl RankingEngine {
    /// Rank a snapshot with competition ranking
    ///
    /// Players are stably sorted by descending score, so tied players keep
    /// their input order. An empty snapshot is [`DomainError::InvalidInput`].
    pub fn rank(snapshot: &ScoreSnapshot) -> Result<Standings, DomainError> {
        if snapshot.is_empty() {
            return Err(DomainError::invalid_input(
                "cannot rank an empty score snapshot",
            ));
        }

        let mut sorted: Vec<&PlayerScore> = snapshot.iter().collect();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));

        let mut position = 1;
        let entries: Vec<RankEntry> = sorted
            .chunk_by(|a, b| a.score == b.score)
            .map(|group| {
                let entry = RankEntry {
                    rank: position,
                    players: group.iter().map(|p| p.player.clone()).collect(),
                    score: group[0].score,
                };
                position += group.len();
                entry
            })
            .collect();

        let top = &entries[0];
        let winners = match top.players.as_slice() {
            [only] => Winners::Sole(only.clone()),
            many => Winners::Joint(many.to_vec()),
        };

        Ok(Standings { entries, winners })
    }
}
