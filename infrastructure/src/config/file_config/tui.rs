//! TUI configuration from TOML (`[tui]` section)

use serde::{Deserialize, Serialize};

/// Raw TUI configuration from TOML
///
/// # Example
///
/// ```toml
/// [tui]
/// result_display_ms = 2000
/// tick_rate_ms = 250
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// How long the answer feedback stays on screen
    pub result_display_ms: u64,
    /// Redraw interval
    pub tick_rate_ms: u64,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self {
            result_display_ms: 3000,
            tick_rate_ms: 250,
        }
    }
}
