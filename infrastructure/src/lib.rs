//! Infrastructure layer for culture-kingdom
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the Open Trivia Database question source, the JSONL
//! game recorder, and configuration file loading.

pub mod config;
pub mod logging;
pub mod trivia;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGameConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileTriviaConfig, FileTuiConfig,
};
pub use logging::{JsonlGameRecorder, default_log_directory};
pub use trivia::{OpenTdbQuestionSource, QuestionBank, TriviaError, TriviaSettings};
