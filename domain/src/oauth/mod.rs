//! OAuth login domain.
//!
//! - [`entities::ProviderType`]: closed set of known identity providers
//! - [`entities::OAuthProvider`]: a provider offered for login
//! - [`repository::OAuthRepository`]: trait for provider discovery

pub mod entities;
pub mod repository;
