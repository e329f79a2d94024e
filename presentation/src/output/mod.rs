//! Output formatting for game results

pub mod console;
