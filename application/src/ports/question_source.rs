//! Question source port
//!
//! Defines the interface for retrieving trivia questions.

use async_trait::async_trait;
use kingdom_domain::{Difficulty, Question};
use thiserror::Error;

/// Errors that a question source cannot recover from on its own
///
/// Transient failures (timeouts, rate limits, an empty batch) are retried
/// inside the adapter and never surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuestionSourceError {
    #[error("Question source unavailable: {0}")]
    Unavailable(String),

    #[error("Question source rejected the request: {0}")]
    InvalidRequest(String),

    #[error("Question source returned an invalid payload: {0}")]
    InvalidPayload(String),
}

/// Supplies questions of a requested difficulty
///
/// Implementations must return a question whose difficulty matches the
/// request, with choices already shuffled and decoded to plain text.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch one question, retrying internally until one is available
    async fn fetch(&self, difficulty: Difficulty) -> Result<Question, QuestionSourceError>;
}
