#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use movie_core::movie::Movie;
use movie_core::storage::{MovieStorage, StorageError};
use movie_core::types::MovieId;
use tower::ServiceExt;

use movie_api::config::ServerConfig;
use movie_api::routes;
use movie_api::state::AppState;

// ---------------------------------------------------------------------------
// In-memory storage double
// ---------------------------------------------------------------------------

type FailureFn = Box<dyn Fn() -> StorageError + Send + Sync>;

/// `MovieStorage` kept in a `HashMap`, optionally failing every call.
#[derive(Default)]
pub struct InMemoryStorage {
    movies: Mutex<HashMap<MovieId, Movie>>,
    failure: Option<FailureFn>,
    closed: AtomicBool,
    store_calls: AtomicUsize,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A storage whose every call fails with the error built by `make_err`.
    pub fn failing(make_err: impl Fn() -> StorageError + Send + Sync + 'static) -> Self {
        Self {
            failure: Some(Box::new(make_err)),
            ..Self::default()
        }
    }

    /// A storage that fails like a broken database connection.
    pub fn unavailable() -> Self {
        Self::failing(|| {
            StorageError::backend(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "pq: secret-host:5432 connection refused",
            ))
        })
    }

    pub fn with_movie(movie: Movie) -> Self {
        let storage = Self::new();
        storage.movies.lock().unwrap().insert(movie.id, movie);
        storage
    }

    pub fn len(&self) -> usize {
        self.movies.lock().unwrap().len()
    }

    pub fn store_calls(&self) -> usize {
        self.store_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), StorageError> {
        match &self.failure {
            Some(make_err) => Err(make_err()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MovieStorage for InMemoryStorage {
    async fn get(&self, id: MovieId) -> Result<Movie, StorageError> {
        self.check()?;
        self.movies
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn store(&self, movie: &mut Movie) -> Result<(), StorageError> {
        self.store_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        movie.id = MovieId::new_v4();
        self.movies.lock().unwrap().insert(movie.id, movie.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.check()
    }

    async fn close(&self) -> Result<(), StorageError> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Err(StorageError::Closed);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        run_migrations: false,
    }
}

/// Build the full application router over the given storage.
///
/// Uses the same `build_router` as the binary, so tests exercise the
/// production middleware stack.
pub fn build_test_app(storage: Arc<InMemoryStorage>) -> Router {
    let state = AppState {
        storage,
        config: Arc::new(test_config()),
    };
    routes::build_router(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a request with a raw body. No content type is set, mirroring clients
/// that send bare JSON.
pub async fn send(app: Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_owned()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    send(app, Method::POST, uri, body).await
}

pub async fn get_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    send(app, Method::GET, uri, body).await
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, "").await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}
