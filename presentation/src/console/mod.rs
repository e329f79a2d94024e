//! Line-based console front end
//!
//! Reads player input from stdin one line at a time and prints questions,
//! results and the final ranking with colored output. `menu` and `quit`
//! are accepted at every prompt.

mod game;
mod input;
mod presenter;
mod prompt;
mod setup;

pub use game::{ConsoleGame, ConsoleOptions};
pub use input::{ConsoleInput, parse_choice};
pub use presenter::ConsolePresenter;
pub use prompt::{LinePrompt, Reply, parse_name_reply, parse_reply};
pub use setup::{MenuChoice, SetupOutcome, parse_menu_choice, parse_positive};
