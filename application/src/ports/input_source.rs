//! Player input port
//!
//! The game asks an [`InputSource`] for every decision a player makes. The
//! adapter is responsible for validating raw input (menu numbers, key
//! presses) and only ever hands typed [`GameEvent`]s to the use case.
//!
//! # Built-in Implementations
//!
//! - [`ScriptedInput`] - replays a fixed list of events, for tests and demos
//!
//! Interactive adapters (console prompts, TUI key handling) live in the
//! presentation layer.

use async_trait::async_trait;
use kingdom_domain::{GameEvent, Question};
use std::collections::VecDeque;
use std::sync::Mutex;
use thiserror::Error;

/// Failure to obtain input at all (not a bad answer)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Input closed")]
    Closed,

    #[error("I/O error: {0}")]
    Io(String),
}

/// Source of player decisions
#[async_trait]
pub trait InputSource: Send + Sync {
    /// Ask `player` for a difficulty.
    ///
    /// Expected to return [`GameEvent::DifficultyChosen`] or
    /// [`GameEvent::Cancel`].
    async fn choose_difficulty(&self, player: &str, round: u32) -> Result<GameEvent, InputError>;

    /// Ask `player` to answer `question`.
    ///
    /// Expected to return [`GameEvent::ChoiceSelected`] or
    /// [`GameEvent::Cancel`].
    async fn choose_answer(&self, player: &str, question: &Question)
    -> Result<GameEvent, InputError>;
}

/// Replays a queue of events in order, regardless of what is asked
///
/// Returns [`InputError::Closed`] once the queue is exhausted.
pub struct ScriptedInput {
    events: Mutex<VecDeque<GameEvent>>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = GameEvent>) -> Self {
        Self {
            events: Mutex::new(events.into_iter().collect()),
        }
    }

    /// Events not yet handed out
    pub fn remaining(&self) -> usize {
        self.events.lock().map(|q| q.len()).unwrap_or(0)
    }

    fn next(&self) -> Result<GameEvent, InputError> {
        let mut events = self
            .events
            .lock()
            .map_err(|e| InputError::Io(e.to_string()))?;
        events.pop_front().ok_or(InputError::Closed)
    }
}

#[async_trait]
impl InputSource for ScriptedInput {
    async fn choose_difficulty(&self, _player: &str, _round: u32) -> Result<GameEvent, InputError> {
        self.next()
    }

    async fn choose_answer(
        &self,
        _player: &str,
        _question: &Question,
    ) -> Result<GameEvent, InputError> {
        self.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kingdom_domain::{CancelTarget, Difficulty};

    #[tokio::test]
    async fn test_scripted_input_replays_then_closes() {
        let input = ScriptedInput::new([
            GameEvent::DifficultyChosen(Difficulty::Easy),
            GameEvent::Cancel(CancelTarget::Menu),
        ]);
        assert_eq!(input.remaining(), 2);
        assert_eq!(
            input.choose_difficulty("A", 1).await,
            Ok(GameEvent::DifficultyChosen(Difficulty::Easy))
        );
        assert_eq!(
            input.choose_difficulty("A", 1).await,
            Ok(GameEvent::Cancel(CancelTarget::Menu))
        );
        assert_eq!(input.choose_difficulty("A", 1).await, Err(InputError::Closed));
    }
}
