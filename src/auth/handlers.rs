//! Login and logout handlers.
//!
//! Both rejection causes (unknown email and wrong password) produce the
//! identical response, so the endpoint never reveals which addresses are
//! registered. Verification time still differs between the two paths; that
//! is a known gap, left as-is.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;

use crate::auth::cookie::{auth_cookie, clear_cookie};
use crate::auth::password::verify_password;
use crate::auth::tokens::issue_token;
use crate::error::AppError;
use crate::pages;
use crate::server::state::AppState;

/// Error shown for any rejected login attempt.
pub const LOGIN_ERROR_MESSAGE: &str = "Incorrect email or password";

/// Where the client navigates after a successful login.
const AUTHENTICATED_AREA: &str = "/document";

/// Credentials submitted by the login form.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// `GET /login`: render the login form.
pub async fn login_page() -> Html<String> {
    Html(pages::login_page(None))
}

/// `POST /login`: verify credentials, issue a token, set the cookie.
///
/// On success: 200 with an `HX-Redirect` header pointing at the
/// authenticated area and the `Authorization` cookie on the response.
/// On rejection: 401 with the re-rendered form.
pub async fn sign_in(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let credential = state.store.find_by_email(&form.email).await?;

    let verified = match &credential {
        Some(credential) => verify_password(&form.password, &credential.password)?,
        None => false,
    };

    if !verified {
        tracing::warn!(email = %form.email, "login rejected");
        return Ok(rejection());
    }

    let token = issue_token(&form.email, &state.config)?;
    let cookie = auth_cookie(
        &token,
        state.config.access_token_max_age_secs(),
        !state.config.environment.is_dev(),
    );

    tracing::info!(email = %form.email, "login succeeded");
    Ok((
        StatusCode::OK,
        [
            ("hx-redirect", AUTHENTICATED_AREA.to_string()),
            ("set-cookie", cookie),
        ],
    )
        .into_response())
}

/// `GET /logout`: clear the cookie and send the client home.
///
/// There is no server-side state to invalidate; the cleared cookie is the
/// whole logout.
pub async fn logout() -> Response {
    (
        StatusCode::FOUND,
        [
            ("location", "/".to_string()),
            ("set-cookie", clear_cookie()),
        ],
    )
        .into_response()
}

fn rejection() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Html(pages::login_page(Some(LOGIN_ERROR_MESSAGE))),
    )
        .into_response()
}
