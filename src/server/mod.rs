//! Server initialization and shared state.

pub mod init;
pub mod state;

pub use init::{create_app, init_database};
pub use state::AppState;
