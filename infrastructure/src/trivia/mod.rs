//! Open Trivia Database adapter
//!
//! Implements the [`QuestionSource`](kingdom_application::QuestionSource)
//! port on top of an OpenTDB-compatible HTTP API. Questions are fetched in
//! batches, decoded, shuffled and buffered per difficulty in a
//! [`QuestionBank`].

mod bank;
mod client;
mod error;
mod payload;
mod sanitize;

pub use bank::QuestionBank;
pub use client::{OpenTdbQuestionSource, TriviaSettings};
pub use error::TriviaError;
pub use payload::{RawQuestion, TriviaResponse, parse_response};
pub use sanitize::decode_entities;
