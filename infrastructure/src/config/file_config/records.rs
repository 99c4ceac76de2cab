//! Record store configuration from TOML (`[records]` section)

use serde::{Deserialize, Serialize};

/// Raw record store configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRecordsConfig {
    /// JSON file holding the records (an array of records)
    pub data_file: Option<String>,
}
