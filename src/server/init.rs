//! Server initialization.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::auth::store::CredentialStore;
use crate::config::Config;
use crate::error::AppError;
use crate::routes::create_router;
use crate::server::state::AppState;

/// Connect to Postgres and bring the schema up to date.
///
/// The database is not optional: login cannot work without it, so any
/// failure aborts startup.
pub async fn init_database(config: &Config) -> Result<PgPool, AppError> {
    tracing::info!("connecting to database");
    let pool = PgPool::connect(&config.database_url()).await?;

    tracing::info!("running database migrations");
    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}

/// Assemble the application from its injected pieces.
pub fn create_app(config: Arc<Config>, store: Arc<dyn CredentialStore>) -> Router {
    create_router(AppState { config, store })
}
