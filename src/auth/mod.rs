//! Authentication: password hashing, access tokens, the credential store,
//! and the login/logout handlers.

pub mod cookie;
pub mod handlers;
pub mod password;
pub mod store;
pub mod tokens;

pub use handlers::{login_page, logout, sign_in};
pub use store::{seed_default_user, CredentialStore, PgCredentialStore, UserCredential};
