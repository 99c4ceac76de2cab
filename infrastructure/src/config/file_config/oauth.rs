//! OAuth configuration from TOML (`[oauth]` section)

use annotator_application::DEFAULT_AUTHORIZE_URL;
use serde::{Deserialize, Serialize};

/// A provider entry as written in the config file
///
/// `type` is kept as a raw string so that an unknown provider is reported
/// by validation instead of failing the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOAuthProvider {
    #[serde(rename = "type")]
    pub provider_type: String,
    /// Display name (defaults to the provider's well-known name)
    pub name: Option<String>,
}

/// Raw OAuth configuration from TOML
///
/// Off unless `enabled = true` is written somewhere in the merged config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOAuthConfig {
    /// Offer OAuth login at all
    pub enabled: bool,
    /// Authorization endpoint every login redirects to
    pub authorize_url: String,
    /// Providers offered on the login screen, in order
    pub providers: Vec<FileOAuthProvider>,
}

impl Default for FileOAuthConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            authorize_url: DEFAULT_AUTHORIZE_URL.to_string(),
            providers: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oauth_section_deserialize() {
        let toml_str = r#"
[oauth]
enabled = true
authorize_url = "https://auth.example.com/authorize"

[[oauth.providers]]
type = "github"
name = "Company GitHub"

[[oauth.providers]]
type = "google"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.oauth.enabled);
        assert_eq!(
            config.oauth.authorize_url,
            "https://auth.example.com/authorize"
        );
        assert_eq!(config.oauth.providers.len(), 2);
        assert_eq!(config.oauth.providers[0].provider_type, "github");
        assert_eq!(
            config.oauth.providers[0].name.as_deref(),
            Some("Company GitHub")
        );
        assert!(config.oauth.providers[1].name.is_none());
    }

    #[test]
    fn test_oauth_default_is_disabled() {
        let config = FileOAuthConfig::default();
        assert!(!config.enabled);
        assert!(config.providers.is_empty());
        assert_eq!(config.authorize_url, DEFAULT_AUTHORIZE_URL);
    }

    #[test]
    fn test_oauth_section_without_enabled_stays_off() {
        let toml_str = r#"
[oauth]
[[oauth.providers]]
type = "github"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.oauth.enabled);
        assert_eq!(config.oauth.providers.len(), 1);
    }
}
