//! Application-level configuration.
//!
//! Controls how a game session behaves at runtime, independent of where the
//! values came from (config file, CLI flags).

use std::time::Duration;

/// Game session behavior configuration.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Upper bound on waiting for one question; `None` waits indefinitely.
    pub fetch_timeout: Option<Duration>,
}

impl SessionConfig {
    /// Creates a SessionConfig from an optional timeout in seconds.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            fetch_timeout: seconds.map(Duration::from_secs),
        }
    }
}
