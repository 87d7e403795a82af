use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is internally reference-counted).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: flashdeck_db::DbPool,
    /// Server configuration (read by middleware and the auth extractor).
    pub config: Arc<ServerConfig>,
}
