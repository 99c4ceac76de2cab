//! Record domain.
//!
//! - [`entities::Record`]: a record under annotation, optionally answered
//! - [`entities::RecordAnswer`]: the persisted response attached to a record
//! - [`repository::RecordRepository`]: trait for record persistence

pub mod entities;
pub mod repository;
