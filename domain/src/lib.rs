//! Domain layer for culture-kingdom
//!
//! This crate contains the game rules: questions, scores, the round state
//! machine and the tie-aware ranking. It performs no I/O and has no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Rounds and turns
//!
//! A game is a sequence of rounds. In each round every player, in input
//! order, picks a [`Difficulty`], answers one [`Question`] and earns that
//! difficulty's points when correct. [`RoundController`] sequences this as a
//! state machine; unlimited games run until a [`GameEvent::Cancel`].
//!
//! ## Ranking
//!
//! [`RankingEngine`] groups equal scores into one rank (competition ranking,
//! with gaps after ties) and reports a sole winner or joint winners.

pub mod config;
pub mod core;
pub mod game;
pub mod ranking;
pub mod scoring;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{
    difficulty::Difficulty,
    error::{DomainError, DomainResult},
    question::{ChoiceIndex, Question},
};
pub use game::{
    CancelTarget, GameEvent, Phase, RoundAdvance, RoundController, RoundLimit, Transition,
    TurnResult,
};
pub use ranking::{RankEntry, RankingEngine, Standings, Winners, join_names, ordinal};
pub use scoring::{PlayerScore, ScoreBoard, ScoreSnapshot};
