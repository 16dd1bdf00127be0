use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The pool is created once at startup and handed in here; handlers never
/// open their own connections. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: workouts_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
