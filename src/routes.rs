//! Router assembly.

use axum::http::StatusCode;
use axum::routing::get;
use axum::{middleware, Router};
use tower_http::services::ServeDir;

use crate::auth::handlers::{login_page, logout, sign_in};
use crate::middleware::auth::auth_middleware;
use crate::pages::{get_document, get_home};
use crate::server::state::AppState;

/// Build the application router.
///
/// Public pages and the login flow come first, then the authenticated area
/// behind the auth middleware, then static assets and the 404 fallback.
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/document", get(get_document))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/", get(get_home))
        .route("/login", get(login_page).post(sign_in))
        .route("/logout", get(logout))
        .merge(protected)
        .nest_service("/static", ServeDir::new("static"))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(state)
}
