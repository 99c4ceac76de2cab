//! OAuth login view-model
//!
//! Adapts [`OAuthLoginUseCase`] to observable state for a login screen:
//! the list of providers to offer, and the authorize action.

use crate::state::Observable;
use annotator_application::{Navigator, OAuthLoginUseCase};
use annotator_domain::{OAuthProvider, OAuthRepository, ProviderType};
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

/// Await a list-producing load, degrading any failure to an empty list.
///
/// The error is logged at debug level and dropped: callers cannot tell
/// "nothing configured" from "fetch failed", and nothing is shown to the user.
pub async fn load_with_empty_fallback<T, E, F>(load: F) -> Vec<T>
where
    E: Display,
    F: Future<Output = Result<Vec<T>, E>>,
{
    match load.await {
        Ok(items) => items,
        Err(e) => {
            debug!("Load failed, falling back to empty list: {}", e);
            Vec::new()
        }
    }
}

/// View-model behind the OAuth login screen
pub struct OAuthLoginViewModel<R: OAuthRepository + ?Sized> {
    oauth_login: Arc<OAuthLoginUseCase<R>>,
    navigator: Arc<dyn Navigator>,
    providers: Observable<Vec<OAuthProvider>>,
    initialized: AtomicBool,
}

impl<R: OAuthRepository + ?Sized> OAuthLoginViewModel<R> {
    /// Build the view-model with an empty provider list.
    ///
    /// Nothing is loaded until [`init`](Self::init) runs, so observers can
    /// subscribe first and render the empty state.
    pub fn new(oauth_login: Arc<OAuthLoginUseCase<R>>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            oauth_login,
            navigator,
            providers: Observable::default(),
            initialized: AtomicBool::new(false),
        }
    }

    /// Run provider discovery. Only the first call loads; later calls return
    /// immediately.
    ///
    /// Discovery failures leave the provider list empty; this never fails.
    pub async fn init(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            debug!("Providers already loaded, skipping discovery");
            return;
        }
        self.load_providers().await;
    }

    async fn load_providers(&self) {
        let providers = load_with_empty_fallback(self.oauth_login.get_providers()).await;
        debug!("Offering {} providers", providers.len());
        self.providers.set(providers);
    }

    /// Providers to offer, empty until discovery succeeds
    pub fn providers(&self) -> &Observable<Vec<OAuthProvider>> {
        &self.providers
    }

    /// Start the login redirect for `provider`.
    ///
    /// Exactly one navigation per call. The target is the configured
    /// authorization endpoint whichever provider is passed.
    pub fn authorize(&self, provider: ProviderType) {
        let url = self.oauth_login.authorization_url(provider);
        info!("Redirecting to authorization endpoint for {}", provider);
        self.navigator.navigate(url);
    }
}
