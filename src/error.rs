//! Application error type and its HTTP representation.
//!
//! Every failure that leaves the service layer is one of the [`AppError`]
//! kinds. Storage outcomes are reclassified by
//! [`crate::application::services::LinkService`] before they get here, so
//! nothing in an error body carries store-internal detail.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Domain-level failure kinds.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing input, rejected before any store call.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The store has no row for the requested link.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Short name already taken, or generation ran out of attempts.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Any other storage failure. Opaque to the caller.
    #[error("{message}")]
    Persistence { message: String, details: Value },

    /// The operation context was cancelled or its deadline passed.
    #[error("{message}")]
    Cancelled { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn persistence(message: impl Into<String>, details: Value) -> Self {
        Self::Persistence {
            message: message.into(),
            details,
        }
    }

    pub fn cancelled(message: impl Into<String>, details: Value) -> Self {
        Self::Cancelled {
            message: message.into(),
            details,
        }
    }

    /// HTTP status the transport layer uses for this error kind.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Cancelled { .. } => StatusCode::REQUEST_TIMEOUT,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Conflict { .. } => "conflict",
            AppError::Persistence { .. } => "internal_error",
            AppError::Cancelled { .. } => "cancelled",
        }
    }

    /// Builds the serializable payload without consuming the error.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details }
            | AppError::Persistence { message, details }
            | AppError::Cancelled { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code: self.code(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request validation failed", details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid JSON body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::bad_request(
            "Invalid path parameter",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(
            "Invalid query parameters",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
