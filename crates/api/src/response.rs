//! Uniform response envelope.
//!
//! Every API response, success or failure, is exactly one of
//! [`SuccessBody`] or [`ErrorBody`]; the `success` flag mirrors the variant.
//! Use these instead of ad-hoc `serde_json::json!` bodies for compile-time
//! type safety and consistent serialization.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Current time as an RFC 3339 UTC string with a single trailing `Z`.
///
/// `to_rfc3339_opts(.., use_z: true)` already emits the `Z` suffix, so no
/// suffix is appended manually anywhere.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Pagination metadata for list responses.
#[derive(Debug, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: u64,
    pub pages: u64,
}

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct SuccessBody<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T: Serialize> SuccessBody<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            timestamp: utc_timestamp(),
            pagination: None,
        }
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

/// Inner error description of the error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Standard error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    pub error: ErrorDetails,
    pub timestamp: String,
}

impl ErrorBody {
    pub fn new(
        message: impl Into<String>,
        code: Option<String>,
        details: Option<serde_json::Value>,
    ) -> Self {
        let message = message.into();
        Self {
            success: false,
            message: message.clone(),
            error: ErrorDetails {
                message,
                code,
                details,
            },
            timestamp: utc_timestamp(),
        }
    }
}
