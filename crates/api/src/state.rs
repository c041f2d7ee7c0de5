use std::sync::Arc;

use movie_core::storage::MovieStorage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Movie persistence. Production wires `movie_db::SqlMovieStorage`.
    pub storage: Arc<dyn MovieStorage>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
