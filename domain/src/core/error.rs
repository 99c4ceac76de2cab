//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown OAuth provider: {0}")]
    UnknownProvider(String),

    #[error("Invalid record id: {0}")]
    InvalidRecordId(String),
}

/// Errors surfaced by repository implementations
///
/// Repositories sit at the persistence/network boundary, so their
/// failures are expressed independently of any transport.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl RepositoryError {
    /// Check if this error means the target does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound(_))
    }
}
