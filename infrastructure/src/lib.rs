//! Infrastructure layer for annotator
//!
//! This crate contains adapters that implement the ports defined in the
//! domain and application layers, including configuration file loading.

pub mod config;
pub mod events;
pub mod logging;
pub mod repositories;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileLoggingConfig, FileOAuthConfig, FileOAuthProvider,
    FileOutputConfig, FileRecordsConfig,
};
pub use events::InProcessEventDispatcher;
pub use logging::JsonlEventLogger;
pub use repositories::{ConfiguredOAuthRepository, InMemoryRecordRepository};
