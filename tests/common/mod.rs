//! Shared test fixtures: an in-memory credential store and a preconfigured
//! test server.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use serde::Serialize;

use docgate::auth::password::hash_password;
use docgate::auth::store::{CredentialStore, UserCredential};
use docgate::config::{Config, Environment};
use docgate::error::AppError;
use docgate::server::create_app;

/// In-memory credential store, standing in for Postgres.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<HashMap<String, UserCredential>>,
}

impl MemoryStore {
    /// A store preloaded with one account, hashed the way production
    /// hashes.
    pub fn with_user(email: &str, password: &str) -> Self {
        let store = MemoryStore::default();
        let hash = hash_password(password).unwrap();
        store.users.lock().unwrap().insert(
            email.to_string(),
            UserCredential {
                email: email.to_string(),
                password: hash,
                created_at: Utc::now(),
            },
        );
        store
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredential>, AppError> {
        Ok(self.users.lock().unwrap().get(email).cloned())
    }

    async fn insert(&self, email: &str, password_hash: &str) -> Result<String, AppError> {
        self.users.lock().unwrap().insert(
            email.to_string(),
            UserCredential {
                email: email.to_string(),
                password: password_hash.to_string(),
                created_at: Utc::now(),
            },
        );
        Ok(email.to_string())
    }
}

/// Configuration used by the HTTP tests; environment varies per test.
pub fn test_config(environment: Environment) -> Config {
    Config {
        environment,
        jwt_secret: "integration-test-secret".into(),
        access_token_expire_minutes: 30,
        db_user: "docgate".into(),
        db_password: "hunter2".into(),
        db_host: "localhost".into(),
        db_port: 5432,
        db_name: "docgate".into(),
        log_level: "info".into(),
        log_file: None,
        default_user_email: "admin@example.com".into(),
        default_user_pw: "changeme".into(),
        server_port: 3000,
    }
}

/// Spin up a test server over the full router with an injected store.
pub fn test_server(config: Config, store: Arc<MemoryStore>) -> TestServer {
    let app = create_app(Arc::new(config), store);
    TestServer::new(app).unwrap()
}

/// Form body for `POST /login`.
#[derive(Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

/// Pull the raw token back out of a `Set-Cookie` value.
pub fn token_from_set_cookie(set_cookie: &str) -> String {
    let start = set_cookie
        .find("Bearer ")
        .expect("cookie should carry a Bearer value")
        + "Bearer ".len();
    let rest = &set_cookie[start..];
    let end = rest.find('"').expect("cookie value should be quoted");
    rest[..end].to_string()
}
