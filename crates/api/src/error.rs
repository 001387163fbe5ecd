use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use scanmarket_core::error::CoreError;
use scanmarket_lookup::SearchError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`SearchError`] for the one
/// downstream call whose failure is hard. Implements [`IntoResponse`] to
/// produce consistent JSON error responses.
///
/// Downstream failures abort the whole request, so 500 bodies carry the
/// error's own message (including the upstream status for search
/// failures) -- there is no partial offer list to sanitize around.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `scanmarket_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The web-search provider failed; the resolver has no fallback.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
                }
            },

            AppError::Search(err) => {
                tracing::error!(error = %err, "Search provider failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SEARCH_ERROR",
                    err.to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
