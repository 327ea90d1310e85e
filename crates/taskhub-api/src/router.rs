//! Route definitions for the TaskHub HTTP API.
//!
//! All routes are mounted under `/api`. The authentication gate runs on
//! every request; handlers opt into protection with the
//! `AuthenticatedUser` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, patch, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(task_routes())
        .merge(health_routes());

    let cors = middleware::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::request_logging))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::request_gate,
        ))
        .with_state(state)
}

/// Auth endpoints: login
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(handlers::auth::login))
}

/// Task CRUD and search endpoints
fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", post(handlers::task::create_task))
        .route("/tasks", get(handlers::task::search_tasks))
        .route("/tasks/{id}", get(handlers::task::get_task))
        .route("/tasks/{id}", put(handlers::task::update_task))
        .route("/tasks/{id}", patch(handlers::task::patch_task))
        .route("/tasks/{id}", delete(handlers::task::delete_task))
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
