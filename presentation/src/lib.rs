//! Presentation layer for culture-kingdom
//!
//! This crate contains CLI definitions, output formatters, the line-based
//! console game and the full-screen TUI.

pub mod cli;
pub mod console;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use console::{ConsoleGame, ConsoleOptions};
pub use output::console::ConsoleFormatter;
pub use progress::FetchSpinner;
pub use tui::{TuiApp, TuiSettings};
