//! docgate: a small web application with a cookie-based JWT login flow.
//!
//! An axum HTTP server exposes a landing page, a login form, and an
//! authenticated document area. Credentials live in a Postgres `auth_user`
//! table; passwords are bcrypt-hashed; sessions are stateless HS256 JWTs
//! carried in an HTTP-only cookie. Logs go to the console and, when
//! configured, a daily-rotating JSON file.
//!
//! # Module structure
//!
//! - [`config`] - environment-sourced settings, built once at startup
//! - [`auth`] - password hashing, tokens, credential store, login handlers
//! - [`middleware`] - cookie verification for protected routes
//! - [`pages`] - HTML page rendering
//! - [`routes`] - router assembly
//! - [`server`] - app state and startup wiring
//! - [`logging`] - console and rotating-file tracing setup
//! - [`error`] - the application error enum

pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod pages;
pub mod routes;
pub mod server;
