//! Extractor for the identity attached by the request gate.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use taskhub_core::error::AppError;

use crate::error::ApiError;

/// Identity of the caller, inserted into request extensions by the
/// authentication gate. Handlers that take this extractor reject requests
/// that did not present a valid token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Token subject.
    pub subject: String,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| ApiError(AppError::authentication("Unauthorized")))
    }
}
