//! Event dispatcher port
//!
//! Defines how use cases announce domain events without knowing who
//! listens to them.

use annotator_domain::DomainEvent;

/// Fan-out channel from producers of domain events to their listeners
///
/// `dispatch` is fire-and-forget: it returns nothing and never fails.
/// Implementations deliver synchronously to every listener registered at
/// the time of the call, in registration order.
pub trait EventDispatcher: Send + Sync {
    /// Publish an event to all registered listeners
    fn dispatch(&self, event: DomainEvent);
}

/// Receiver side of the dispatcher
///
/// Implementations live wherever the reaction lives (presentation,
/// structured logging, caches).
pub trait EventListener: Send + Sync {
    /// Called once for every dispatched event
    fn on_event(&self, event: &DomainEvent);
}

impl<F> EventListener for F
where
    F: Fn(&DomainEvent) + Send + Sync,
{
    fn on_event(&self, event: &DomainEvent) {
        self(event)
    }
}
