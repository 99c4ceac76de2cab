//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod clear_record;
pub mod oauth_login;
