use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// All generation errors are terminal for the current activation: the session
/// returns to idle and a previously stored archive stays downloadable.
#[derive(Debug, Error)]
pub enum AppError {
    /// Blank or whitespace-only description. Raised before any model call.
    #[error("Please enter a description.")]
    EmptyInput,

    /// The provider call failed. Carries the provider's error text verbatim.
    #[error("Generation failed: {0}")]
    Generation(String),

    /// The model responded but one or more required segments were missing or
    /// empty. The raw response is discarded.
    #[error("Invalid website format received. Please try again.")]
    InvalidFormat,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::EmptyInput => (StatusCode::BAD_REQUEST, "EMPTY_INPUT", self.to_string()),
            AppError::Generation(msg) => {
                tracing::error!("Generation error: {msg}");
                (StatusCode::BAD_GATEWAY, "GENERATION_FAILED", self.to_string())
            }
            AppError::InvalidFormat => {
                tracing::error!("Model response violated the output contract");
                (StatusCode::BAD_GATEWAY, "INVALID_FORMAT", self.to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
