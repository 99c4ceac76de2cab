//! Repository implementations.

mod configured_oauth;
mod record_store;

pub use configured_oauth::ConfiguredOAuthRepository;
pub use record_store::InMemoryRecordRepository;
