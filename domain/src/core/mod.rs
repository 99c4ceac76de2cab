//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`error::RepositoryError`]: failures reported by repositories

pub mod error;
