//! Trivia API configuration from TOML (`[trivia]` section)

use crate::trivia::TriviaSettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw trivia API configuration from TOML
///
/// # Example
///
/// ```toml
/// [trivia]
/// api_url = "https://opentdb.com/api.php"
/// amount = 10
/// category = 9
/// retry_delay_ms = 1500
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTriviaConfig {
    /// Base URL of an Open Trivia Database compatible endpoint
    pub api_url: String,
    /// Questions requested per call (1-50)
    pub amount: u8,
    /// Optional category id
    pub category: Option<u32>,
    /// Per-request HTTP timeout
    pub request_timeout_seconds: u64,
    /// Pause between retries after a failed or empty fetch
    pub retry_delay_ms: u64,
    /// Give up on a single question after this many seconds (unset: never)
    pub fetch_timeout_seconds: Option<u64>,
    /// Maximum buffered questions per difficulty
    pub bank_capacity: usize,
}

impl Default for FileTriviaConfig {
    fn default() -> Self {
        let settings = TriviaSettings::default();
        Self {
            api_url: settings.api_url,
            amount: settings.amount,
            category: settings.category,
            request_timeout_seconds: settings.request_timeout.as_secs(),
            retry_delay_ms: settings.retry_delay.as_millis() as u64,
            fetch_timeout_seconds: None,
            bank_capacity: settings.bank_capacity,
        }
    }
}

impl FileTriviaConfig {
    pub fn to_settings(&self) -> TriviaSettings {
        TriviaSettings {
            api_url: self.api_url.clone(),
            amount: self.amount,
            category: self.category,
            request_timeout: Duration::from_secs(self.request_timeout_seconds),
            retry_delay: Duration::from_millis(self.retry_delay_ms),
            bank_capacity: self.bank_capacity,
        }
    }
}
