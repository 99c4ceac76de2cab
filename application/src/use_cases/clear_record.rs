//! Clear Record use case
//!
//! Removes a record's persisted response, announces the change and resets
//! the local record, in that order.

use crate::ports::event_dispatcher::EventDispatcher;
use annotator_domain::{Record, RecordRepository, RecordResponseUpdated, RepositoryError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while clearing a record
#[derive(Error, Debug)]
pub enum ClearRecordError {
    #[error("Failed to delete record response: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case for clearing a record's answer
///
/// Steps run strictly in sequence:
/// 1. delete the persisted response (only when the record has one)
/// 2. dispatch [`RecordResponseUpdated`] (only when step 1 ran)
/// 3. clear the local record
///
/// A failed deletion returns immediately; the record is left untouched
/// and nothing is dispatched. There is no retry.
pub struct ClearRecordUseCase<R, D>
where
    R: RecordRepository + ?Sized,
    D: EventDispatcher + ?Sized,
{
    record_repository: Arc<R>,
    event_dispatcher: Arc<D>,
}

impl<R, D> ClearRecordUseCase<R, D>
where
    R: RecordRepository + ?Sized,
    D: EventDispatcher + ?Sized,
{
    pub fn new(record_repository: Arc<R>, event_dispatcher: Arc<D>) -> Self {
        Self {
            record_repository,
            event_dispatcher,
        }
    }

    /// Execute the use case against a caller-owned record
    pub async fn execute(&self, record: &mut Record) -> Result<(), ClearRecordError> {
        if let Some(answer) = record.answer() {
            debug!("Deleting response {} of record {}", answer.id, record.id());

            if let Err(e) = self.record_repository.delete_record_response(answer).await {
                warn!("Could not delete response of record {}: {}", record.id(), e);
                return Err(e.into());
            }

            self.event_dispatcher.dispatch(RecordResponseUpdated::new(record).into());
        }

        record.clear();
        info!("Record {} cleared", record.id());
        Ok(())
    }
}
