//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use taskhub_auth::AuthError;
use taskhub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// When the error response was produced.
    pub timestamp: DateTime<Utc>,
    /// HTTP status code.
    pub status: u16,
    /// Short error title.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Field-level details (empty for auth failures).
    pub details: Vec<String>,
}

impl ApiErrorBody {
    /// Build a body for the given status and messages.
    pub fn new(status: StatusCode, error: &str, message: String, details: Vec<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: error.to_string(),
            message,
            details,
        }
    }
}

/// HTTP-facing wrapper around [`AppError`].
///
/// Handlers return this instead of `AppError` directly; the `?` operator
/// converts through the `From` impls below.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, title) = match err.kind {
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
            ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "Validation Failed"),
            ErrorKind::Internal | ErrorKind::Database | ErrorKind::Configuration => {
                tracing::error!(error = %err.message, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };

        // Never leak internals to the client on 5xx.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "Internal server error".to_string()
        } else {
            err.message
        };

        let body = ApiErrorBody::new(status, title, message, err.details);
        (status, Json(body)).into_response()
    }
}

/// Convert validator output into a 400 with one detail line per field.
pub fn validation_error(errors: validator::ValidationErrors) -> ApiError {
    let details = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "is invalid".to_string());
                format!("{field}: {message}")
            })
        })
        .collect();

    ApiError(AppError::validation("Invalid request").with_details(details))
}
