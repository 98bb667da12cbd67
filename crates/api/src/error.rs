use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use songinfo_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `songinfo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Body message for every 5xx response.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::InvalidRequest(msg) => {
                    (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg.clone())
                }
                CoreError::NotFound { entity, key } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} {key} not found"),
                ),
                CoreError::UpstreamUnavailable(msg) => {
                    server_error("UPSTREAM_UNAVAILABLE", msg)
                }
                CoreError::DataFormat(msg) => server_error("DATA_FORMAT_ERROR", msg),
                CoreError::Storage(msg) => server_error("STORAGE_ERROR", msg),
                CoreError::Internal(msg) => server_error("INTERNAL_ERROR", msg),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Log the real cause and hide it behind a generic message.
fn server_error(code: &'static str, detail: &str) -> (StatusCode, &'static str, String) {
    tracing::error!(code, error = %detail, "Request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        code,
        INTERNAL_MESSAGE.to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => server_error("STORAGE_ERROR", &other.to_string()),
    }
}

/// Shorthand for a missing song row.
pub fn song_not_found(id: songinfo_core::types::DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Song",
        key: format!("with id {id}"),
    })
}
