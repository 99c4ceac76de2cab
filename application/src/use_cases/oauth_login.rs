//! OAuth login use case
//!
//! Discovers the identity providers offered on the login screen and
//! resolves where an authorization redirect should go.

use crate::config::LoginConfig;
use annotator_domain::{OAuthProvider, OAuthRepository, ProviderType, RepositoryError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during provider discovery
#[derive(Error, Debug)]
pub enum OAuthLoginError {
    #[error("Provider discovery failed: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case for OAuth login
pub struct OAuthLoginUseCase<R: OAuthRepository + ?Sized> {
    oauth_repository: Arc<R>,
    config: LoginConfig,
}

impl<R: OAuthRepository + ?Sized> OAuthLoginUseCase<R> {
    pub fn new(oauth_repository: Arc<R>, config: LoginConfig) -> Self {
        Self {
            oauth_repository,
            config,
        }
    }

    /// Fetch the providers currently available for login.
    ///
    /// Errors are returned as-is; the caller decides the fallback.
    pub async fn get_providers(&self) -> Result<Vec<OAuthProvider>, OAuthLoginError> {
        let providers = self.oauth_repository.get_providers().await?;
        info!("Discovered {} OAuth providers", providers.len());
        Ok(providers)
    }

    /// Authorization endpoint for a login with `provider`.
    ///
    /// Always the single configured endpoint; the provider does not
    /// select a different target.
    pub fn authorization_url(&self, provider: ProviderType) -> &str {
        debug!("Resolving authorization endpoint for {}", provider);
        &self.config.authorize_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_AUTHORIZE_URL;
    use async_trait::async_trait;

    struct MockOAuthRepository {
        result: Result<Vec<OAuthProvider>, RepositoryError>,
    }

    #[async_trait]
    impl OAuthRepository for MockOAuthRepository {
        async fn get_providers(&self) -> Result<Vec<OAuthProvider>, RepositoryError> {
            self.result.clone()
        }
    }

    fn use_case(
        result: Result<Vec<OAuthProvider>, RepositoryError>,
    ) -> OAuthLoginUseCase<MockOAuthRepository> {
        OAuthLoginUseCase::new(
            Arc::new(MockOAuthRepository { result }),
            LoginConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_get_providers_keeps_order() {
        let providers = vec![
            OAuthProvider::from(ProviderType::GitHub),
            OAuthProvider::from(ProviderType::HuggingFace),
        ];
        let use_case = use_case(Ok(providers.clone()));

        assert_eq!(use_case.get_providers().await.unwrap(), providers);
    }

    #[tokio::test]
    async fn test_get_providers_propagates_failure() {
        let use_case = use_case(Err(RepositoryError::RequestFailed("503".to_string())));

        let err = use_case.get_providers().await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Provider discovery failed: Request failed: 503"
        );
    }

    #[test]
    fn test_authorization_url_ignores_provider() {
        let use_case = use_case(Ok(vec![]));
        for provider in ProviderType::ALL {
            assert_eq!(use_case.authorization_url(provider), DEFAULT_AUTHORIZE_URL);
        }
    }
}
