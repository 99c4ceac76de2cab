//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement. Repository traits live in the domain crate.

pub mod event_dispatcher;
pub mod navigator;
