//! Password hashing and verification using bcrypt.

use crate::error::AppError;

/// Hash a password with a fresh random salt.
///
/// The returned string embeds the salt, cost, and digest, so it is the only
/// value that needs to be stored.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    Ok(bcrypt::hash(password, bcrypt::DEFAULT_COST)?)
}

/// Verify a password against a stored bcrypt hash.
///
/// bcrypt recomputes the digest with the salt embedded in `stored` and
/// compares in constant time. `Ok(false)` on mismatch; `Err` only when the
/// stored hash is malformed.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, AppError> {
    Ok(bcrypt::verify(password, stored)?)
}
