use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mflix_core::error::CoreError;
use mongodb::error::{ErrorKind, WriteFailure};
use serde_json::json;

use crate::response::ErrorBody;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds driver-specific variants.
/// Implements [`IntoResponse`] so every fault, local or store-originated,
/// is rewritten into the error envelope exactly once, at the boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error (validation or not-found).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from the MongoDB driver.
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity } => (
                    StatusCode::NOT_FOUND,
                    "RESOURCE_NOT_FOUND",
                    format!("{entity} not found"),
                    None,
                ),
                CoreError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    msg.clone(),
                    None,
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                        None,
                    )
                }
            },

            AppError::Database(err) => classify_mongo_error(err),

            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = ErrorBody::new(message, Some(code.to_string()), details);
        (status, axum::Json(body)).into_response()
    }
}

/// Classify a MongoDB driver error into a status, error code, message, and
/// optional details.
///
/// - Duplicate key violations (code 11000, single or batch write) map to 409.
/// - Other write failures (shape rejected by the store) map to 400.
/// - Everything else maps to 500 with a `DATABASE_ERROR` code.
fn classify_mongo_error(
    err: &mongodb::error::Error,
) -> (StatusCode, &'static str, String, Option<serde_json::Value>) {
    let duplicate_key = match &*err.kind {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        ErrorKind::InsertMany(insert) => insert
            .write_errors
            .as_ref()
            .is_some_and(|errors| errors.iter().any(|e| e.code == 11000)),
        _ => false,
    };

    if duplicate_key {
        return (
            StatusCode::CONFLICT,
            "DUPLICATE_KEY",
            "Duplicate key error occurred.".to_string(),
            Some(json!("A document with the same key already exists.")),
        );
    }

    match &*err.kind {
        ErrorKind::Write(_) | ErrorKind::InsertMany(_) => (
            StatusCode::BAD_REQUEST,
            "WRITE_ERROR",
            "Document validation failed.".to_string(),
            Some(json!(err.to_string())),
        ),
        _ => {
            tracing::error!(error = %err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "A database error occurred.".to_string(),
                Some(json!(err.to_string())),
            )
        }
    }
}
