//! Tie-aware final ranking.
//!
//! [`RankingEngine`] turns a [`ScoreSnapshot`](crate::scoring::ScoreSnapshot)
//! into competition-ranked groups ("1224" ranking: tied players share a rank
//! and the next rank skips accordingly) and decides whether there is a sole
//! winner or several joint winners.

mod engine;
pub mod language;

pub use engine::{RankEntry, RankingEngine, Standings, Winners};
pub use language::{join_names, ordinal};
