//! Navigation port
//!
//! A full-page navigation to an external URL. The only effect is the
//! redirect itself: nothing is returned, awaited, or cancellable.

/// Performs a full-page navigation
///
/// Implementations live in the presentation layer (browser redirect,
/// console hint, test recorder).
pub trait Navigator: Send + Sync {
    /// Navigate to `url`
    fn navigate(&self, url: &str);
}
