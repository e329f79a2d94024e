//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for the final ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable ranking lines (default)
    #[default]
    Text,
    /// JSON document with entries and winners
    Json,
}
