//! Configuration file loading for annotator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ANNOTATOR_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./annotator.toml` or `./.annotator.toml`
//! 4. Global: `$XDG_CONFIG_HOME/annotator/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileLoggingConfig, FileOAuthConfig, FileOAuthProvider, FileOutputConfig,
    FileRecordsConfig,
};
pub use loader::ConfigLoader;
