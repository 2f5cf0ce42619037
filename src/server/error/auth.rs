//! Authentication errors.

use thiserror::Error;

/// Errors from registering, authenticating or changing passwords.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Username/password pair did not verify.
    ///
    /// Returned for unknown usernames too, so callers cannot tell which accounts exist.
    #[error("Invalid username or password")]
    InvalidCredentials,
    /// No user has the given ID.
    #[error("User with ID {0} not found")]
    UserNotFound(i32),
}
