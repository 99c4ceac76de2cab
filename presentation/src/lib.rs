//! Presentation layer for annotator
//!
//! This crate contains view-models, observable UI state, CLI definitions,
//! navigators and console output formatting.

pub mod cli;
pub mod navigation;
pub mod output;
pub mod state;
pub mod view_models;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use navigation::ConsoleNavigator;
pub use output::console::{ConsoleEventReporter, ConsoleFormatter};
pub use state::Observable;
pub use view_models::{OAuthLoginViewModel, load_with_empty_fallback};
