//! Application layer for annotator
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_AUTHORIZE_URL, LoginConfig};
pub use ports::{
    event_dispatcher::{EventDispatcher, EventListener},
    navigator::Navigator,
};
pub use use_cases::clear_record::{ClearRecordError, ClearRecordUseCase};
pub use use_cases::oauth_login::{OAuthLoginError, OAuthLoginUseCase};
