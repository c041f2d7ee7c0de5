//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use movie_api::error::AppError;
use movie_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::from(CoreError::Validation(r#""name" field is mandatory"#.into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], r#""name" field is mandatory"#);
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("unable to parse JSON body: EOF".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "unable to parse JSON body: EOF");
}

#[tokio::test]
async fn not_found_error_returns_404_with_message() {
    let err = AppError::NotFound("no rows in result set".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "no rows in result set");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::internal(
        "cannot retrieve movie",
        "password authentication failed for user \"postgres\"",
    );

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "cannot retrieve movie");

    // The response body must NOT contain the original error details.
    assert!(
        !json.to_string().contains("password"),
        "Internal error response must not leak backend details"
    );
}

#[test]
fn internal_error_display_keeps_the_cause_for_logs() {
    let err = AppError::internal("movie could not be stored", "connection reset");
    assert_eq!(err.to_string(), "movie could not be stored: connection reset");
}
