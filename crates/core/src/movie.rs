//! The movie entity and the payloads that carry it.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::MovieId;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `movies` table.
///
/// Also the create payload: every field is optional on the wire, so a body
/// without `name` decodes to an empty name and is rejected by
/// [`validate_new_movie`]. Any `id` sent by the caller is overwritten when
/// the movie is stored. Capitalized and upper-case field names are accepted
/// on input; output always uses the lower-case names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    #[serde(alias = "Id", alias = "ID")]
    pub id: MovieId,
    #[serde(alias = "Name", alias = "NAME")]
    pub name: String,
    #[serde(alias = "Description", alias = "DESCRIPTION")]
    pub description: String,
    #[serde(alias = "Image", alias = "IMAGE")]
    pub image: String,
}

impl Movie {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: MovieId::nil(),
            name: name.into(),
            description: description.into(),
            image: image.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Body of a movie lookup. A missing `id` decodes to the nil UUID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GetMovieRequest {
    #[serde(alias = "Id", alias = "ID")]
    pub id: MovieId,
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// A movie can only be created with a non-empty name.
pub fn validate_new_movie(movie: &Movie) -> Result<(), CoreError> {
    if movie.name.is_empty() {
        return Err(CoreError::Validation(
            r#""name" field is mandatory"#.to_string(),
        ));
    }
    Ok(())
}

/// Lookups must name a concrete movie.
pub fn validate_get_request(req: &GetMovieRequest) -> Result<(), CoreError> {
    if req.id.is_nil() {
        return Err(CoreError::Validation(
            r#""id" must be different than 0"#.to_string(),
        ));
    }
    Ok(())
}
