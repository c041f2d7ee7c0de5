//! Handlers for `/movies`.
//!
//! Both endpoints read a JSON body, including `GET`, whose body carries the
//! id to look up. Bodies are decoded from raw bytes so a missing or wrong
//! `Content-Type` header does not change the outcome.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use movie_core::movie::{validate_get_request, validate_new_movie, GetMovieRequest, Movie};
use movie_core::storage::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /movies
///
/// Store a new movie. The storage layer assigns the id; any id in the body
/// is discarded.
pub async fn store_movie(State(state): State<AppState>, body: Bytes) -> AppResult<Response> {
    let mut movie: Movie = decode_body(&body)?;
    validate_new_movie(&movie)?;

    state
        .storage
        .store(&mut movie)
        .await
        .map_err(|err| AppError::internal("movie could not be stored", err))?;

    tracing::info!(movie_id = %movie.id, name = %movie.name, "Movie stored");

    json_response(&movie)
}

/// GET /movies
///
/// Look up a movie by the `id` in the request body.
pub async fn get_movie(State(state): State<AppState>, body: Bytes) -> AppResult<Response> {
    let req: GetMovieRequest = decode_body(&body)?;
    validate_get_request(&req)?;

    let movie = match state.storage.get(req.id).await {
        Ok(movie) => movie,
        Err(err @ StorageError::NotFound) => return Err(AppError::NotFound(err.to_string())),
        Err(err) => return Err(AppError::internal("cannot retrieve movie", err)),
    };

    json_response(&movie)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> AppResult<T> {
    serde_json::from_slice(body)
        .map_err(|err| AppError::BadRequest(format!("unable to parse JSON body: {err}")))
}

fn json_response<T: Serialize>(value: &T) -> AppResult<Response> {
    let bytes = serde_json::to_vec(value)
        .map_err(|err| AppError::internal("cannot encode response", err))?;

    Ok(([(CONTENT_TYPE, "application/json")], bytes).into_response())
}
