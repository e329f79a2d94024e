//! Score accumulation for a single game session.
//!
//! Scores are kept per player in input order and can only increase.

mod scoreboard;

pub use scoreboard::{PlayerScore, ScoreBoard, ScoreSnapshot};
