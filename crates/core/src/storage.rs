//! The storage port the HTTP layer talks to.
//!
//! Defines [`MovieStorage`], implemented by the PostgreSQL adapter in
//! `movie_db` and by in-memory doubles in tests, along with
//! [`StorageError`].

use std::time::Duration;

use async_trait::async_trait;

use crate::movie::Movie;
use crate::types::MovieId;

/// Errors returned by a [`MovieStorage`] implementation.
///
/// Only [`StorageError::NotFound`] is meant to be shown to API callers;
/// every other variant is logged and replaced by a generic message.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The query ran but matched zero rows.
    #[error("no rows in result set")]
    NotFound,

    /// The call did not finish within its deadline.
    #[error("storage call timed out after {0:?}")]
    Timeout(Duration),

    /// The handle was already closed.
    #[error("storage is already closed")]
    Closed,

    /// The configured driver is not one this adapter can speak.
    #[error("unsupported database driver: {0}")]
    UnsupportedDriver(String),

    /// Any other failure reported by the backend.
    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wrap an opaque backend error.
    pub fn backend(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Backend(err.into())
    }
}

/// Persistence for [`Movie`] records.
///
/// Shared across request tasks behind an `Arc<dyn MovieStorage>`; implementors
/// must be safe to call concurrently.
#[async_trait]
pub trait MovieStorage: Send + Sync {
    /// Fetch the movie with the given id.
    ///
    /// Returns [`StorageError::NotFound`] when no row matches.
    async fn get(&self, id: MovieId) -> Result<Movie, StorageError>;

    /// Persist `movie` under a freshly generated id.
    ///
    /// The generated id is written back into `movie.id`, replacing whatever
    /// the caller put there.
    async fn store(&self, movie: &mut Movie) -> Result<(), StorageError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), StorageError>;

    /// Release the underlying connections. Call once during shutdown.
    async fn close(&self) -> Result<(), StorageError>;
}
