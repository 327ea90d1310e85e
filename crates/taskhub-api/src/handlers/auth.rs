//! Auth handlers — login.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use crate::dto::request::LoginRequest;
use crate::dto::response::AuthResponse;
use crate::error::{ApiError, validation_error};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    req.validate().map_err(validation_error)?;

    let issued = state.issuer.login(&req.username, &req.password)?;

    Ok(Json(AuthResponse {
        token: issued.token,
    }))
}
