//! OAuth provider value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Known identity providers (Value Object)
///
/// The set is closed: a provider name outside it does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderType {
    HuggingFace,
    GitHub,
    Google,
}

impl ProviderType {
    /// All known providers, in display order
    pub const ALL: [ProviderType; 3] = [
        ProviderType::HuggingFace,
        ProviderType::GitHub,
        ProviderType::Google,
    ];

    /// Get the string identifier for this provider
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderType::HuggingFace => "huggingface",
            ProviderType::GitHub => "github",
            ProviderType::Google => "google",
        }
    }

    /// Human-readable provider name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderType::HuggingFace => "Hugging Face",
            ProviderType::GitHub => "GitHub",
            ProviderType::Google => "Google",
        }
    }
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "huggingface" | "hugging-face" | "hf" => Ok(ProviderType::HuggingFace),
            "github" => Ok(ProviderType::GitHub),
            "google" => Ok(ProviderType::Google),
            other => Err(DomainError::UnknownProvider(other.to_string())),
        }
    }
}

impl Serialize for ProviderType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProviderType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An identity provider available for login (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthProvider {
    #[serde(rename = "type")]
    provider_type: ProviderType,
    display_name: String,
}

impl OAuthProvider {
    pub fn new(provider_type: ProviderType, display_name: impl Into<String>) -> Self {
        Self {
            provider_type,
            display_name: display_name.into(),
        }
    }

    pub fn provider_type(&self) -> ProviderType {
        self.provider_type
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl From<ProviderType> for OAuthProvider {
    fn from(provider_type: ProviderType) -> Self {
        Self::new(provider_type, provider_type.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_type_roundtrip() {
        for provider in ProviderType::ALL {
            let parsed: ProviderType = provider.to_string().parse().unwrap();
            assert_eq!(provider, parsed);
        }
    }

    #[test]
    fn test_provider_type_is_closed() {
        let err = "okta".parse::<ProviderType>().unwrap_err();
        assert_eq!(err, DomainError::UnknownProvider("okta".to_string()));
    }

    #[test]
    fn test_provider_type_aliases() {
        assert_eq!("HF".parse::<ProviderType>().unwrap(), ProviderType::HuggingFace);
        assert_eq!("GitHub".parse::<ProviderType>().unwrap(), ProviderType::GitHub);
    }

    #[test]
    fn test_provider_deserialize() {
        let provider: OAuthProvider =
            serde_json::from_str(r#"{"type": "github", "display_name": "Company GitHub"}"#)
                .unwrap();
        assert_eq!(provider.provider_type(), ProviderType::GitHub);
        assert_eq!(provider.display_name(), "Company GitHub");

        let bad = serde_json::from_str::<OAuthProvider>(r#"{"type": "okta", "display_name": "x"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_provider_from_type_uses_default_name() {
        let provider = OAuthProvider::from(ProviderType::HuggingFace);
        assert_eq!(provider.display_name(), "Hugging Face");
    }
}
