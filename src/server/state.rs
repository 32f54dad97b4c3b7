//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

use crate::server::util::jwt::TokenService;

/// Application state containing shared resources and dependencies.
///
/// Initialized once during startup and cloned for each request via Axum's state
/// extraction. Both fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` holds the signing keys
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}
