//! Row mapping for the `movies` table.

use movie_core::movie::Movie;
use movie_core::types::MovieId;
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: MovieId,
    pub name: String,
    pub description: String,
    pub image: String,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie {
            id: row.id,
            name: row.name,
            description: row.description,
            image: row.image,
        }
    }
}
