//! In-process event dispatcher.
//!
//! Keeps listeners in registration order and fires them synchronously on
//! the caller's thread.

use annotator_application::{EventDispatcher, EventListener};
use annotator_domain::DomainEvent;
use std::sync::{Arc, RwLock};
use tracing::{trace, warn};

/// Registry of event listeners, fired in registration order.
#[derive(Default)]
pub struct InProcessEventDispatcher {
    listeners: RwLock<Vec<Arc<dyn EventListener>>>,
}

impl InProcessEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it receives every event dispatched from now on.
    pub fn register(&self, listener: Arc<dyn EventListener>) {
        match self.listeners.write() {
            Ok(mut listeners) => listeners.push(listener),
            Err(e) => warn!("Event listener registry poisoned: {}", e),
        }
    }

    /// Register a closure as a listener.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&DomainEvent) + Send + Sync + 'static,
    {
        self.register(Arc::new(callback));
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.read().map(|l| l.len()).unwrap_or(0)
    }

    /// Remove all registered listeners.
    pub fn clear(&self) {
        if let Ok(mut listeners) = self.listeners.write() {
            listeners.clear();
        }
    }
}

impl EventDispatcher for InProcessEventDispatcher {
    fn dispatch(&self, event: DomainEvent) {
        // Snapshot so a listener may register others without deadlocking
        let listeners: Vec<Arc<dyn EventListener>> = match self.listeners.read() {
            Ok(listeners) => listeners.clone(),
            Err(e) => {
                warn!("Event listener registry poisoned: {}", e);
                return;
            }
        };

        trace!(
            "Dispatching {} to {} listeners",
            event.event_type(),
            listeners.len()
        );

        for listener in listeners {
            listener.on_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annotator_domain::{Record, RecordId, RecordResponseUpdated};
    use std::sync::Mutex;

    fn event(id: &str) -> DomainEvent {
        let record = Record::new(RecordId::new(id).unwrap(), "ds");
        RecordResponseUpdated::new(&record).into()
    }

    #[test]
    fn test_dispatch_without_listeners() {
        let dispatcher = InProcessEventDispatcher::new();
        dispatcher.dispatch(event("rec-1"));
        assert_eq!(dispatcher.listener_count(), 0);
    }

    #[test]
    fn test_listeners_fire_in_registration_order() {
        let dispatcher = InProcessEventDispatcher::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        for name in ["first", "second", "third"] {
            let calls = Arc::clone(&calls);
            dispatcher.subscribe(move |_event| calls.lock().unwrap().push(name));
        }

        dispatcher.dispatch(event("rec-1"));
        dispatcher.dispatch(event("rec-2"));

        assert_eq!(
            *calls.lock().unwrap(),
            vec!["first", "second", "third", "first", "second", "third"]
        );
    }

    #[test]
    fn test_listener_receives_event() {
        let dispatcher = InProcessEventDispatcher::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        dispatcher.subscribe(move |event| {
            let DomainEvent::RecordResponseUpdated(e) = event;
            sink.lock().unwrap().push(e.record().id().to_string());
        });

        dispatcher.dispatch(event("rec-42"));

        assert_eq!(*seen.lock().unwrap(), vec!["rec-42".to_string()]);
    }

    #[test]
    fn test_clear_removes_listeners() {
        let dispatcher = InProcessEventDispatcher::new();
        let count = Arc::new(Mutex::new(0));
        let c = Arc::clone(&count);
        dispatcher.subscribe(move |_| *c.lock().unwrap() += 1);
        assert_eq!(dispatcher.listener_count(), 1);

        dispatcher.clear();
        dispatcher.dispatch(event("rec-1"));

        assert_eq!(dispatcher.listener_count(), 0);
        assert_eq!(*count.lock().unwrap(), 0);
    }

    #[test]
    fn test_listener_registered_during_dispatch_sees_next_event_only() {
        let dispatcher = Arc::new(InProcessEventDispatcher::new());
        let late_calls = Arc::new(Mutex::new(0));

        let d = Arc::clone(&dispatcher);
        let late = Arc::clone(&late_calls);
        dispatcher.subscribe(move |_| {
            let late = Arc::clone(&late);
            d.subscribe(move |_| *late.lock().unwrap() += 1);
        });

        dispatcher.dispatch(event("rec-1"));
        assert_eq!(*late_calls.lock().unwrap(), 0);

        dispatcher.dispatch(event("rec-2"));
        assert_eq!(*late_calls.lock().unwrap(), 1);
    }
}
