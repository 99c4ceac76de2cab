//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving every dispatched domain event
    pub event_log: Option<String>,
    /// Diagnostic log file (in addition to stderr)
    pub file: Option<String>,
}
