//! Logging infrastructure: structured domain event logging.
//!
//! Provides [`JsonlEventLogger`], a JSONL file writer that implements
//! the [`EventListener`](annotator_application::EventListener) port.

mod jsonl_event_logger;

pub use jsonl_event_logger::JsonlEventLogger;
