//! Application error types.
//!
//! One enum covers every failure a request handler or the startup path can
//! hit. Handlers return `Result<_, AppError>` and rely on the
//! `IntoResponse` impl for the HTTP mapping; internal detail is logged,
//! never rendered to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Database query or connection failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure at startup.
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// Password hashing failure (fresh hash or malformed stored hash).
    #[error("password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure at issuance.
    #[error("token encoding error: {0}")]
    TokenEncode(#[source] jsonwebtoken::errors::Error),

    /// Token rejected: bad signature, malformed structure, or expired.
    /// All causes collapse into this one variant so callers cannot
    /// distinguish them.
    #[error("invalid or expired token")]
    InvalidToken,
}

impl AppError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::Database(_) | Self::Migrate(_) | Self::Hash(_) | Self::TokenEncode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = match self {
            Self::InvalidToken => "Invalid or expired token",
            _ => "Internal server error",
        };
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_token_maps_to_unauthorized() {
        assert_eq!(AppError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn database_errors_map_to_internal() {
        let error = AppError::Database(sqlx::Error::RowNotFound);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn response_body_never_carries_detail() {
        let response = AppError::Database(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
