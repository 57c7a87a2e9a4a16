//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. `DatabaseConnection` is a
//! connection pool, so clones share the pool.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after the database connection has
    /// been established; the resulting state is provided to the Axum router
    /// for use in request handlers.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
