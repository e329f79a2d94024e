//! Question value object
//!
//! A [`Question`] is built fresh for every turn by the question source and
//! never persisted. Construction validates the invariants the round state
//! machine relies on; after that the type is read-only.

use super::difficulty::Difficulty;
use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Zero-based position of a choice within [`Question::choices`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChoiceIndex(usize);

impl ChoiceIndex {
    /// Wrap a 0-based index
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Convert a 1-based number as typed by a player
    pub fn from_one_based(number: usize) -> Option<Self> {
        number.checked_sub(1).map(Self)
    }

    pub fn get(&self) -> usize {
        self.0
    }

    /// 1-based number for display
    pub fn number(&self) -> usize {
        self.0 + 1
    }
}

/// A multiple-choice trivia question (Value Object)
///
/// Choices arrive already shuffled and decoded; the question only guarantees
/// there are at least two of them and that the correct answer appears
/// exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    text: String,
    choices: Vec<String>,
    correct_answer: String,
    category: String,
    difficulty: Difficulty,
}

impl Question {
    /// Create a new question
    ///
    /// Fails when the text is blank, there are fewer than two choices, or
    /// the correct answer is missing from the choices or listed twice.
    pub fn new(
        text: impl Into<String>,
        choices: Vec<String>,
        correct_answer: impl Into<String>,
        category: impl Into<String>,
        difficulty: Difficulty,
    ) -> Result<Self, DomainError> {
        let text = text.into();
        let correct_answer = correct_answer.into();

        if text.trim().is_empty() {
            return Err(DomainError::invalid_input("question text is empty"));
        }
        if choices.len() < 2 {
            return Err(DomainError::invalid_input(
                "question needs at least two choices",
            ));
        }
        match choices.iter().filter(|c| **c == correct_answer).count() {
            0 => {
                return Err(DomainError::invalid_input(format!(
                    "correct answer '{correct_answer}' is not one of the choices"
                )));
            }
            1 => {}
            _ => {
                return Err(DomainError::invalid_input(format!(
                    "correct answer '{correct_answer}' is listed more than once"
                )));
            }
        }

        Ok(Self {
            text,
            choices,
            correct_answer,
            category: category.into(),
            difficulty,
        })
    }

    /// Question text, entity-decoded
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Choices in display order
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Choice at `index`, or `None` when out of range
    pub fn choice(&self, index: ChoiceIndex) -> Option<&str> {
        self.choices.get(index.get()).map(String::as_str)
    }

    /// Exact string comparison against the correct answer
    pub fn is_correct(&self, index: ChoiceIndex) -> bool {
        self.choice(index) == Some(self.correct_answer.as_str())
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
