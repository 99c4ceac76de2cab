//! Observable state holder for view-models.
//!
//! A thin wrapper over [`tokio::sync::watch`]: a current value plus change
//! subscription, with no UI framework attached. Only the owning
//! view-model (this crate) can write; consumers read and subscribe.

use tokio::sync::watch;

/// Current value plus change notifications
#[derive(Debug)]
pub struct Observable<T> {
    sender: watch::Sender<T>,
}

impl<T> Observable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            sender: watch::Sender::new(initial),
        }
    }

    /// Borrow the current value
    pub fn borrow(&self) -> watch::Ref<'_, T> {
        self.sender.borrow()
    }

    /// Subscribe to changes.
    ///
    /// The receiver starts at the current value; `changed().await` resolves
    /// on the next write.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }

    /// Replace the value and notify subscribers
    pub(crate) fn set(&self, value: T) {
        self.sender.send_replace(value);
    }
}

impl<T: Clone> Observable<T> {
    /// Clone out the current value
    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
