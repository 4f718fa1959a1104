//! Authentication middleware for protected routes.
//!
//! Verifies the `Authorization` cookie set by the login flow and attaches
//! the authenticated identity to request extensions. Every failure mode
//! (missing cookie, malformed value, bad signature, expiry) surfaces as a
//! plain 401.

use axum::extract::{Request, State};
use axum::http::{header, request::Parts, StatusCode};
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::cookie::token_from_cookie_header;
use crate::auth::tokens::verify_token;
use crate::server::state::AppState;

/// Identity established by the middleware, available to handlers through
/// request extensions.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub email: String,
}

/// Verify the request's cookie-carried token before letting it through.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let cookie_header = request
        .headers()
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing cookie header on protected route");
            StatusCode::UNAUTHORIZED
        })?;

    let token = token_from_cookie_header(cookie_header).ok_or_else(|| {
        tracing::warn!("authorization cookie missing or malformed");
        StatusCode::UNAUTHORIZED
    })?;

    let email = verify_token(token, &state.config).map_err(|error| {
        tracing::warn!(error = %error, "token rejected");
        StatusCode::UNAUTHORIZED
    })?;

    request.extensions_mut().insert(AuthenticatedUser { email });
    Ok(next.run(request).await)
}

/// Extractor handing the authenticated identity to handlers behind the
/// middleware.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                StatusCode::UNAUTHORIZED
            })?;

        Ok(AuthUser(user))
    }
}
