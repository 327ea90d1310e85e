//! Bearer-token authentication gate.
//!
//! Applied to the whole router. Requests without an `Authorization: Bearer`
//! header pass through unauthenticated; protected handlers reject them via
//! the [`AuthenticatedUser`](crate::extractors::AuthenticatedUser) extractor.
//! Requests that present a token are either fully verified or rejected with
//! a 401 before reaching any handler.

use axum::Json;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::error::ApiErrorBody;
use crate::extractors::AuthenticatedUser;
use crate::state::AppState;

pub async fn request_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(&request) else {
        return next.run(request).await;
    };

    let subject = match state.codec.extract_subject(&token) {
        Ok(subject) => subject,
        Err(err) => return unauthorized(err.kind_name()),
    };

    if !state.authenticator.is_known_subject(&subject) {
        return unauthorized("unknown_subject");
    }

    if let Err(err) = state.codec.verify(&token, &subject) {
        return unauthorized(err.kind_name());
    }

    request
        .extensions_mut()
        .insert(AuthenticatedUser { subject });

    next.run(request).await
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(request: &Request) -> Option<String> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Fixed 401 response. The reason is logged but never sent to the client.
fn unauthorized(reason: &str) -> Response {
    debug!(reason = %reason, "Rejected bearer token");
    let body = ApiErrorBody::new(
        StatusCode::UNAUTHORIZED,
        "Unauthorized",
        "Unauthorized".to_string(),
        Vec::new(),
    );
    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}
