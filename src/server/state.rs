//! Application state.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::store::CredentialStore;
use crate::config::Config;

/// Shared state handed to every handler.
///
/// Both fields are read-only after startup: the configuration is immutable
/// and the store only wraps a connection pool, so no locking is needed
/// across requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn CredentialStore>,
}

impl FromRef<AppState> for Arc<Config> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<dyn CredentialStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
