//! Salted one-way password hashing.
//!
//! Passwords are stored as bcrypt hashes. Each call to [`hash_password`] draws a fresh
//! salt, so two hashes of the same password differ while both still verify.

use crate::server::error::Error;

/// Hashes a plaintext password at the given bcrypt cost
pub fn hash_password(plaintext: &str, cost: u32) -> Result<String, Error> {
    Ok(bcrypt::hash(plaintext, cost)?)
}

/// Checks a plaintext password against a stored hash
///
/// Returns `Ok(false)` for a wrong password and `Err` only when the stored hash is malformed.
pub fn verify_password(plaintext: &str, hash: &str) -> Result<bool, Error> {
    Ok(bcrypt::verify(plaintext, hash)?)
}
