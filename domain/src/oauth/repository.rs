//! OAuth provider repository trait

use super::entities::OAuthProvider;
use crate::core::error::RepositoryError;
use async_trait::async_trait;

/// Source of the identity providers currently available for login
#[async_trait]
pub trait OAuthRepository: Send + Sync {
    /// Fetch the available providers, in the order they should be offered
    async fn get_providers(&self) -> Result<Vec<OAuthProvider>, RepositoryError>;
}
