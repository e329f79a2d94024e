//! Core domain concepts shared across all subdomains.
//!
//! - [`difficulty::Difficulty`] - easy / medium / hard and their point values
//! - [`question::Question`] - a validated multiple-choice question
//! - [`error::DomainError`] - domain-level errors

pub mod difficulty;
pub mod error;
pub mod question;
