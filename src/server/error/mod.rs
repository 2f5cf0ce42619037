//! Error types for the holonet server layer.
//!
//! Domain-specific errors live in submodules and are aggregated into [`Error`], which
//! services return. Repositories return [`sea_orm::DbErr`] directly; constraint violations
//! (unique, foreign key, not-null, subject guards) surface through the `DbErr` variant.

pub mod auth;
pub mod config;

use thiserror::Error;

use crate::server::error::{auth::AuthError, config::ConfigError};

/// Main error type for the holonet server layer.
///
/// Uses `thiserror`'s `#[from]` attribute so the `?` operator converts underlying
/// errors automatically.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (unknown user, wrong password).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Password hashing error (invalid cost, malformed stored hash).
    #[error(transparent)]
    PasswordHashError(#[from] bcrypt::BcryptError),
}
