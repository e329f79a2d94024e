//! Spinner shown while a question is being fetched

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Single-line spinner, started and stopped around slow operations
pub struct FetchSpinner {
    bar: Mutex<Option<ProgressBar>>,
    enabled: bool,
}

impl FetchSpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
            enabled: true,
        }
    }

    /// A spinner that never draws (quiet mode)
    pub fn disabled() -> Self {
        Self {
            bar: Mutex::new(None),
            enabled: false,
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn start(&self, message: impl Into<String>) {
        if !self.enabled {
            return;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::style());
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.bar.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    pub fn stop(&self) {
        if let Ok(mut slot) = self.bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }

    pub fn is_running(&self) -> bool {
        self.bar.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }
}

impl Default for FetchSpinner {
    fn default() -> Self {
        Self::new()
    }
}
