//! Configuration file loading for culture-kingdom
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `KINGDOM_*` environment variables (`KINGDOM_TRIVIA__API_URL=...`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./kingdom.toml` or `./.kingdom.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/culture-kingdom/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGameConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, FileTriviaConfig, FileTuiConfig,
};
pub use loader::ConfigLoader;
