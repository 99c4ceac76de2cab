//! OAuth repository answering from the `[oauth]` config section.

use crate::config::FileOAuthConfig;
use annotator_domain::{OAuthProvider, OAuthRepository, RepositoryError};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Provider discovery backed by static configuration
///
/// A disabled OAuth section offers no providers.
pub struct ConfiguredOAuthRepository {
    providers: Vec<OAuthProvider>,
}

impl ConfiguredOAuthRepository {
    pub fn new(providers: Vec<OAuthProvider>) -> Self {
        Self { providers }
    }

    pub fn from_config(config: &FileOAuthConfig) -> Self {
        if !config.enabled {
            debug!("OAuth disabled, no providers offered");
            return Self::new(Vec::new());
        }

        let (providers, issues) = config.parse_providers();
        for issue in issues {
            warn!("{}", issue.message);
        }
        Self::new(providers)
    }
}

#[async_trait]
impl OAuthRepository for ConfiguredOAuthRepository {
    async fn get_providers(&self) -> Result<Vec<OAuthProvider>, RepositoryError> {
        Ok(self.providers.clone())
    }
}
