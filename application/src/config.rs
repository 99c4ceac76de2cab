//! Application-level configuration.
//!
//! Configuration types that control how use cases behave.

/// Authorization endpoint used when no other target is configured
pub const DEFAULT_AUTHORIZE_URL: &str =
    "https://frascuchon-oauth2-app-test.hf.space/oauth2/huggingface/authorize";

/// Login behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginConfig {
    /// Authorization endpoint every login redirect targets.
    pub authorize_url: String,
}

impl LoginConfig {
    pub fn with_authorize_url(url: impl Into<String>) -> Self {
        Self {
            authorize_url: url.into(),
        }
    }
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self::with_authorize_url(DEFAULT_AUTHORIZE_URL)
    }
}
