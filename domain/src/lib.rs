//! Domain layer for annotator
//!
//! This crate contains the entities, value objects, domain events and
//! repository traits. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! - **Record**: an item under annotation, optionally carrying a persisted answer
//! - **OAuthProvider**: an identity provider offered on the login screen
//! - **DomainEvent**: an immutable fact broadcast after a durable change

pub mod config;
pub mod core;
pub mod events;
pub mod oauth;
pub mod record;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::error::{DomainError, RepositoryError};
pub use events::{DomainEvent, RecordResponseUpdated};
pub use oauth::{
    entities::{OAuthProvider, ProviderType},
    repository::OAuthRepository,
};
pub use record::{
    entities::{Record, RecordAnswer, RecordId, RecordQuestion, ResponseStatus},
    repository::RecordRepository,
};
