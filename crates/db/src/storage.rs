//! PostgreSQL implementation of the [`MovieStorage`] port.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use movie_core::movie::Movie;
use movie_core::storage::{MovieStorage, StorageError};
use movie_core::types::MovieId;

use crate::config::DatabaseConfig;
use crate::repositories::MovieRepo;
use crate::DbPool;

/// Deadline applied to every individual storage call.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// [`MovieStorage`] backed by a Postgres connection pool.
///
/// Cheap to clone; clones share the pool and its closed flag.
#[derive(Debug, Clone)]
pub struct SqlMovieStorage {
    pool: DbPool,
    closed: Arc<AtomicBool>,
}

impl SqlMovieStorage {
    /// Resolve the driver, open a pool and check the database answers.
    ///
    /// No handle is returned unless all three steps succeed.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StorageError> {
        if !config.is_supported_driver() {
            return Err(StorageError::UnsupportedDriver(config.driver.clone()));
        }

        let pool = crate::create_pool(config).await.map_err(to_storage_error)?;
        let storage = Self::from_pool(pool);

        if let Err(err) = storage.ping().await {
            storage.pool.close().await;
            return Err(err);
        }

        tracing::info!(
            host = %config.host,
            port = config.port,
            dbname = %config.dbname,
            "Connected to movie database",
        );
        Ok(storage)
    }

    /// Wrap an already opened pool.
    pub fn from_pool(pool: DbPool) -> Self {
        Self {
            pool,
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl MovieStorage for SqlMovieStorage {
    async fn get(&self, id: MovieId) -> Result<Movie, StorageError> {
        let row = with_deadline(MovieRepo::find_by_id(&self.pool, id)).await?;
        Ok(row.into())
    }

    async fn store(&self, movie: &mut Movie) -> Result<(), StorageError> {
        movie.id = MovieId::new_v4();
        with_deadline(MovieRepo::insert(&self.pool, movie)).await
    }

    async fn ping(&self) -> Result<(), StorageError> {
        with_deadline(crate::health_check(&self.pool)).await
    }

    async fn close(&self) -> Result<(), StorageError> {
        if self.closed.swap(true, Ordering::SeqCst) || self.pool.is_closed() {
            return Err(StorageError::Closed);
        }
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
        Ok(())
    }
}

/// Run `fut` under [`QUERY_TIMEOUT`], translating driver errors.
async fn with_deadline<T, F>(fut: F) -> Result<T, StorageError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(QUERY_TIMEOUT, fut).await {
        Ok(result) => result.map_err(to_storage_error),
        Err(_) => Err(StorageError::Timeout(QUERY_TIMEOUT)),
    }
}

fn to_storage_error(err: sqlx::Error) -> StorageError {
    match err {
        sqlx::Error::RowNotFound => StorageError::NotFound,
        other => StorageError::backend(other),
    }
}
