//! Application layer for culture-kingdom
//!
//! This crate contains the game session use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionConfig;
pub use ports::{
    game_recorder::{GameRecord, GameRecorder, NoGameRecorder},
    input_source::{InputError, InputSource, ScriptedInput},
    presenter::{GamePresenter, NoPresenter},
    question_source::{QuestionSource, QuestionSourceError},
};
pub use use_cases::play_game::{GameOutcome, PlayGameError, PlayGameInput, PlayGameUseCase};
