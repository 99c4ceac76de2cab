//! Domain events.
//!
//! Immutable facts about state changes, broadcast after the change is
//! durable. Events are built and consumed synchronously during dispatch.

use crate::record::entities::Record;
use serde::Serialize;

/// A record's persisted response changed
///
/// Carries the record as it was at the moment of dispatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordResponseUpdated {
    record: Record,
}

impl RecordResponseUpdated {
    pub fn new(record: &Record) -> Self {
        Self {
            record: record.clone(),
        }
    }

    pub fn record(&self) -> &Record {
        &self.record
    }
}

/// All domain events
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum DomainEvent {
    RecordResponseUpdated(RecordResponseUpdated),
}

impl DomainEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            DomainEvent::RecordResponseUpdated(_) => "RecordResponseUpdated",
        }
    }
}

impl From<RecordResponseUpdated> for DomainEvent {
    fn from(event: RecordResponseUpdated) -> Self {
        DomainEvent::RecordResponseUpdated(event)
    }
}
