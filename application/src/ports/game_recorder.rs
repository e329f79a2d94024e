//! Port for structured game transcripts.
//!
//! Defines the [`GameRecorder`] trait for recording what happened in a game
//! (rounds, answers, final ranking) to a machine-readable log.
//!
//! This is separate from `tracing`-based operation logs: tracing carries
//! diagnostics, while this port captures the game itself.

use serde_json::Value;

/// A structured game event
pub struct GameRecord {
    /// Record type identifier (e.g., "turn_scored", "game_completed").
    pub record_type: &'static str,
    /// JSON payload with record-specific data.
    pub payload: Value,
}

impl GameRecord {
    pub fn new(record_type: &'static str, payload: Value) -> Self {
        Self {
            record_type,
            payload,
        }
    }
}

/// Port for writing game records.
///
/// `record` is synchronous and non-fallible; implementations swallow write
/// failures so a full disk never interrupts a game.
pub trait GameRecorder: Send + Sync {
    fn record(&self, record: GameRecord);
}

/// No-op implementation for tests and when recording is disabled.
pub struct NoGameRecorder;

impl GameRecorder for NoGameRecorder {
    fn record(&self, _record: GameRecord) {}
}
