//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use taskhub_auth::credentials::Authenticator;
use taskhub_auth::jwt::TokenCodec;
use taskhub_auth::session::SessionIssuer;
use taskhub_core::config::AppConfig;
use taskhub_service::TaskService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// cheap to clone; the auth components are immutable for the process
/// lifetime.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Token signing and verification.
    pub codec: Arc<TokenCodec>,
    /// Credential verification against the configured account.
    pub authenticator: Arc<Authenticator>,
    /// Login use case.
    pub issuer: Arc<SessionIssuer>,
    /// Task use cases.
    pub task_service: TaskService,
}
