use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use movie_core::error::CoreError;
use serde_json::json;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for validation failures and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `movie_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request body that could not be understood.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The requested record does not exist. The message is shown to callers.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A server-side failure. Only `message` reaches the caller; `source` is
    /// logged.
    #[error("{message}: {source}")]
    Internal {
        message: &'static str,
        source: BoxError,
    },
}

impl AppError {
    pub fn internal(message: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Internal {
            message,
            source: source.into(),
        }
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            AppError::Internal { message, source } => {
                tracing::error!(error = %source, "{message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    message.to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
