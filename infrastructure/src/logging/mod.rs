//! Logging infrastructure: game transcripts and log locations.
//!
//! Provides [`JsonlGameRecorder`], a JSONL file writer that implements the
//! [`GameRecorder`](kingdom_application::GameRecorder) port.

mod jsonl_recorder;

pub use jsonl_recorder::JsonlGameRecorder;

use std::path::PathBuf;

/// Platform data directory for log files (`~/.local/share/culture-kingdom/logs`)
pub fn default_log_directory() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("culture-kingdom").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_directory_is_namespaced() {
        if let Some(dir) = default_log_directory() {
            assert!(dir.ends_with("culture-kingdom/logs"));
        }
    }
}
