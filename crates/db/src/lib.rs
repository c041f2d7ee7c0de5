//! PostgreSQL persistence for movies.
//!
//! Pool management and migrations live here alongside
//! [`storage::SqlMovieStorage`], the adapter behind the
//! [`movie_core::storage::MovieStorage`] port.

use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod models;
pub mod repositories;
pub mod storage;

pub use config::DatabaseConfig;
pub use storage::SqlMovieStorage;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database config.
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(storage::QUERY_TIMEOUT)
        .connect_with(config.connect_options())
        .await
}

/// Round-trip a trivial query to confirm the database answers.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
