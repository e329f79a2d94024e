//! Round and turn sequencing for one game session.
//!
//! [`RoundController`] is a plain state machine driven by [`GameEvent`]s.
//! It never performs I/O: the caller fetches questions and collects input,
//! then feeds the results back in.

mod controller;
mod event;
mod round_limit;

pub use controller::{Phase, RoundAdvance, RoundController, Transition, TurnResult};
pub use event::{CancelTarget, GameEvent};
pub use round_limit::RoundLimit;
