//! HTML page rendering.
//!
//! Pages are embedded templates with placeholder substitution; three
//! static-ish pages do not justify a template engine.

use axum::response::Html;

use crate::middleware::AuthUser;

const INDEX_PAGE: &str = include_str!("../templates/index.html");
const LOGIN_PAGE: &str = include_str!("../templates/login.html");
const DOCUMENT_PAGE: &str = include_str!("../templates/document.html");

/// Render the login form, with the rejection banner when `error` is set.
pub fn login_page(error: Option<&str>) -> String {
    let banner = match error {
        Some(message) => format!(r#"<p class="error">{message}</p>"#),
        None => String::new(),
    };
    LOGIN_PAGE.replace("{{error}}", &banner)
}

/// `GET /`: public landing page.
pub async fn get_home() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// `GET /document`: the authenticated area. Reachable only through the
/// auth middleware.
pub async fn get_document(AuthUser(user): AuthUser) -> Html<String> {
    Html(DOCUMENT_PAGE.replace("{{email}}", &user.email))
}
