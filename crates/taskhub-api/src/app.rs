//! Application builder — wires router + middleware + state into an Axum app.

use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;

use taskhub_auth::credentials::{Authenticator, Credential};
use taskhub_auth::jwt::TokenCodec;
use taskhub_auth::password::PasswordHasher;
use taskhub_auth::session::SessionIssuer;
use taskhub_core::config::AppConfig;
use taskhub_core::error::AppError;
use taskhub_database::repositories::task::TaskRepository;
use taskhub_messaging::{TaskEventPublisher, build_publisher};
use taskhub_service::TaskService;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application from pre-constructed state.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Constructs the application state from configuration.
///
/// Fails fast on invalid auth configuration (empty signing secret,
/// missing credentials) so a misconfigured server never starts.
pub fn build_state(
    config: AppConfig,
    db_pool: PgPool,
    publisher: Arc<dyn TaskEventPublisher>,
) -> Result<AppState, AppError> {
    let hasher = PasswordHasher::new();
    let credential = Credential::from_config(&config.auth, &hasher)?;

    let codec = Arc::new(TokenCodec::new(&config.auth)?);
    let authenticator = Arc::new(Authenticator::new(credential, hasher));
    let issuer = Arc::new(SessionIssuer::new(
        Arc::clone(&authenticator),
        Arc::clone(&codec),
    ));

    let repository = Arc::new(TaskRepository::new(db_pool.clone()));
    let task_service = TaskService::new(repository, publisher);

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        codec,
        authenticator,
        issuer,
        task_service,
    })
}

/// Runs the TaskHub server with the given configuration.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting TaskHub server...");

    let db_pool = taskhub_database::connection::create_pool(&config.database).await?;
    taskhub_database::migration::run_migrations(&db_pool).await?;

    let publisher = build_publisher(&config.messaging).await;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(config, db_pool, publisher)?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("TaskHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
