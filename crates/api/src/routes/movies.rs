//! Route definitions for movies.

use axum::routing::post;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Movie routes. `/movies/` is a prefix: the bare path, the trailing-slash
/// path and anything below it reach the same handlers.
///
/// ```text
/// POST /movies/{*rest} -> store_movie
/// GET  /movies/{*rest} -> get_movie
/// ```
///
/// Any other method gets `405 Method Not Allowed`.
pub fn router() -> Router<AppState> {
    let movie_methods = post(movies::store_movie).get(movies::get_movie);

    Router::new()
        .route("/movies", movie_methods.clone())
        .route("/movies/", movie_methods.clone())
        .route("/movies/{*rest}", movie_methods)
}
