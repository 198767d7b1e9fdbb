use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable: the database handle shares one connection
/// pool and the config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// MongoDB database handle.
    pub db: mongodb::Database,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
