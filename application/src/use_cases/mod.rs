//! Use cases (application services)

pub mod play_game;
