//! Record repository trait

use super::entities::{Record, RecordAnswer, RecordId};
use crate::core::error::RepositoryError;
use async_trait::async_trait;

/// Repository trait for records and their responses
///
/// This is a domain-level abstraction over wherever records live
/// (a remote API, a local store). Implementations live in the
/// infrastructure layer.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Delete the persisted response behind `answer`
    async fn delete_record_response(&self, answer: &RecordAnswer) -> Result<(), RepositoryError>;

    /// Look up a record by id
    async fn find_record(&self, id: &RecordId) -> Result<Record, RepositoryError>;

    /// Store the current state of a record
    async fn save_record(&self, record: &Record) -> Result<(), RepositoryError>;
}
