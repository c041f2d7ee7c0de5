use std::sync::Arc;

use movie_core::storage::MovieStorage;
use movie_db::{DatabaseConfig, SqlMovieStorage};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movie_api::config::ServerConfig;
use movie_api::routes;
use movie_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    init_tracing();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let db_config = DatabaseConfig::from_env();
    tracing::info!(?db_config, "Loaded database configuration");

    // --- Storage ---
    let sql_storage = SqlMovieStorage::connect(&db_config)
        .await
        .expect("Failed to connect to database");

    if config.run_migrations {
        movie_db::run_migrations(sql_storage.pool())
            .await
            .expect("Failed to run database migrations");
        tracing::info!("Database migrations applied");
    }

    let storage: Arc<dyn MovieStorage> = Arc::new(sql_storage);

    // --- App state ---
    let state = AppState {
        storage: Arc::clone(&storage),
        config: Arc::new(config.clone()),
    };

    let app = routes::build_router(state);

    // --- Start server ---
    let listener = config.bind().await.expect("Failed to bind to address");
    match listener.local_addr() {
        Ok(addr) => tracing::info!(%addr, "Starting server"),
        Err(_) => tracing::info!(host = %config.host, port = config.port, "Starting server"),
    }

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %err, "Error serving");
    }

    // --- Post-shutdown cleanup ---
    match storage.close().await {
        Ok(()) => tracing::info!("Graceful shutdown complete"),
        Err(err) => tracing::error!(error = %err, "Failed to close movie storage"),
    }
}

/// Install the global subscriber. `MOVIE_API__LOG_FORMAT=json` switches to
/// JSON lines.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "movie_api=debug,movie_db=debug,tower_http=debug".into());
    let json = std::env::var("MOVIE_API__LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Wait for SIGINT or SIGTERM (on Unix) to start graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
