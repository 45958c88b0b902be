use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Capacity, oversize, malformed-input and processing failures each map
/// to their own status code; a busy server must never look like a bad
/// upload.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Server busy")]
    Busy,

    #[error("Upload too large")]
    PayloadTooLarge,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unreadable PDF: {0}")]
    UnreadablePdf(String),

    #[error("Imposition error: {0}")]
    Impose(#[from] nup_impose::ImposeError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Busy => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVER_BUSY",
                "Too many concurrent jobs, try again shortly".to_string(),
            ),
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                "Uploaded file exceeds the size limit".to_string(),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnreadablePdf(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNREADABLE_PDF",
                msg.clone(),
            ),
            AppError::Impose(e) => {
                tracing::error!("Imposition error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PROCESSING_ERROR",
                    "Error processing PDF".to_string(),
                )
            }
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
