//! docgate server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use docgate::auth::store::{seed_default_user, CredentialStore, PgCredentialStore};
use docgate::config::Config;
use docgate::{logging, server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let config = Arc::new(Config::from_env()?);

    // Keep the appender guard alive for the life of the process; dropping
    // it stops the background log writer.
    let _log_guard = logging::init(&config)?;

    tracing::info!(environment = ?config.environment, "starting docgate");

    let pool = server::init_database(&config).await?;
    let store: Arc<dyn CredentialStore> = Arc::new(PgCredentialStore::new(pool));

    seed_default_user(store.as_ref(), &config).await?;

    let app = server::create_app(config.clone(), store);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
