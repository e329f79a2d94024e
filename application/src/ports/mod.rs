//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod game_recorder;
pub mod input_source;
pub mod presenter;
pub mod question_source;
