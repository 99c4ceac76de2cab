//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; conversion to domain types happens in
//! the accessors below so that bad values surface as [`ConfigIssue`]s.

mod logging;
mod oauth;
mod output;
mod records;

pub use logging::FileLoggingConfig;
pub use oauth::{FileOAuthConfig, FileOAuthProvider};
pub use output::FileOutputConfig;
pub use records::FileRecordsConfig;

use annotator_domain::{ConfigIssue, ConfigIssueCode, OAuthProvider, ProviderType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// OAuth login settings
    pub oauth: FileOAuthConfig,
    /// Record store settings
    pub records: FileRecordsConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileOAuthConfig {
    /// Parse the configured providers, skipping (and reporting) unknown ones.
    pub fn parse_providers(&self) -> (Vec<OAuthProvider>, Vec<ConfigIssue>) {
        let mut providers = Vec::new();
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for entry in &self.providers {
            let provider_type = match entry.provider_type.parse::<ProviderType>() {
                Ok(p) => p,
                Err(_) => {
                    issues.push(ConfigIssue::warning(
                        ConfigIssueCode::UnknownProvider {
                            value: entry.provider_type.clone(),
                        },
                        format!(
                            "oauth.providers: unknown provider '{}', ignoring it",
                            entry.provider_type
                        ),
                    ));
                    continue;
                }
            };

            if !seen.insert(provider_type) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::DuplicateProvider {
                        provider: provider_type.to_string(),
                    },
                    format!("oauth.providers: '{}' is listed more than once", provider_type),
                ));
                continue;
            }

            providers.push(match &entry.name {
                Some(name) => OAuthProvider::new(provider_type, name.clone()),
                None => OAuthProvider::from(provider_type),
            });
        }

        (providers, issues)
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. The authorization endpoint is an https URL
    /// 2. Provider entries are known and unique
    /// 3. OAuth enabled with nothing to offer
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !self.oauth.enabled {
            return issues;
        }

        // 1. Authorization endpoint
        if !self.oauth.authorize_url.starts_with("https://") {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InsecureUrl {
                    field: "oauth.authorize_url".to_string(),
                    value: self.oauth.authorize_url.clone(),
                },
                format!(
                    "oauth.authorize_url must be an https URL, got '{}'",
                    self.oauth.authorize_url
                ),
            ));
        }

        // 2. Providers
        let (providers, provider_issues) = self.oauth.parse_providers();
        issues.extend(provider_issues);

        // 3. Nothing to offer
        if providers.is_empty() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::NoProviders,
                "oauth is enabled but no valid provider is configured",
            ));
        }

        issues
    }
}
