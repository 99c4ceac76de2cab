//! Event dispatch infrastructure.
//!
//! Provides [`InProcessEventDispatcher`], the process-wide implementation
//! of the [`EventDispatcher`](annotator_application::EventDispatcher) port.

mod in_process;

pub use in_process::InProcessEventDispatcher;
