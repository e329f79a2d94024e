//! TUI (Text User Interface) module for culture-kingdom
//!
//! Full-screen front end built on ratatui. The game runs in a background
//! task and talks to the UI loop through [`TuiPresenter`] and
//! [`TuiInputSource`]; keys are mapped per screen by [`KeyHandler`].

mod app;
mod event;
mod input;
mod keys;
mod presenter;
mod state;
mod widgets;

pub use app::{TuiApp, TuiSettings};
pub use event::{InputPrompt, InputRequest, TuiEvent};
pub use input::TuiInputSource;
pub use keys::{KeyAction, KeyHandler};
pub use presenter::TuiPresenter;
pub use state::{GameView, MenuItem, Screen, SetupForm, Stage, TuiState};
