//! View-models adapting use cases to observable UI state.

pub mod oauth_login;

pub use oauth_login::{OAuthLoginViewModel, load_with_empty_fallback};
