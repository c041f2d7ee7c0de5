//! Repository for the `movies` table.

use movie_core::movie::Movie;
use movie_core::types::MovieId;
use sqlx::{Executor, PgPool, Statement};

use crate::models::movie::MovieRow;

/// Column list for `movies` queries.
const COLUMNS: &str = "id, name, description, image";

const INSERT_MOVIE: &str =
    "INSERT INTO movies (id, name, description, image) VALUES ($1, $2, $3, $4)";

/// Provides data access for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Find a movie by its id.
    ///
    /// Fails with `sqlx::Error::RowNotFound` when no row matches.
    pub async fn find_by_id(pool: &PgPool, id: MovieId) -> Result<MovieRow, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Insert a movie exactly as given, including its id.
    ///
    /// Prepares the statement on one pooled connection and executes it on the
    /// same connection; the statement handle is dropped right after.
    pub async fn insert(pool: &PgPool, movie: &Movie) -> Result<(), sqlx::Error> {
        let mut conn = pool.acquire().await?;

        let stmt = (&mut *conn).prepare(INSERT_MOVIE).await?;
        stmt.query()
            .bind(movie.id)
            .bind(&movie.name)
            .bind(&movie.description)
            .bind(&movie.image)
            .execute(&mut *conn)
            .await?;
        drop(stmt);

        Ok(())
    }
}
