//! Access token issuance and verification.
//!
//! Tokens are HS256 JWTs signed with the configured secret, carrying the
//! user's email as subject. Verification is stateless (no database lookup),
//! which also means a token cannot be revoked before it expires.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::AppError;

/// Claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's email.
    pub sub: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

/// Issue a signed access token for `email`, expiring after the configured
/// TTL.
pub fn issue_token(email: &str, config: &Config) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: email.to_string(),
        iat: now,
        exp: now + config.access_token_max_age_secs(),
    };

    let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
    encode(&Header::default(), &claims, &key).map_err(AppError::TokenEncode)
}

/// Verify a token and return the subject it was issued for.
///
/// Bad signature, malformed structure, and expiry all collapse into
/// [`AppError::InvalidToken`].
pub fn verify_token(token: &str, config: &Config) -> Result<String, AppError> {
    let key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
    decode::<Claims>(token, &key, &Validation::default())
        .map(|data| data.claims.sub)
        .map_err(|_| AppError::InvalidToken)
}
