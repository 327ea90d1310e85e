//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use taskhub_api::{build_app, build_state};
use taskhub_core::config::AppConfig;
use taskhub_messaging::NoopPublisher;

pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "admin123";
pub const TEST_JWT_SECRET: &str = "integration-test-secret-0123456789";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a test application with an in-code configuration.
    ///
    /// The database pool is created lazily, so tests that never touch a
    /// task route run without a PostgreSQL instance.
    pub fn new() -> Self {
        let config = test_config();

        let db_pool = taskhub_database::connection::create_lazy_pool(&config.database)
            .expect("Failed to create pool");

        let state = build_state(config.clone(), db_pool.clone(), Arc::new(NoopPublisher))
            .expect("Failed to build state");
        let router = build_app(state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Connect eagerly and run migrations. Requires a running PostgreSQL.
    pub async fn with_database() -> Self {
        let app = Self::new();
        taskhub_database::migration::run_migrations(&app.db_pool)
            .await
            .expect("Failed to run migrations");
        sqlx::query("TRUNCATE tasks RESTART IDENTITY")
            .execute(&app.db_pool)
            .await
            .expect("Failed to clean tasks table");
        app
    }

    /// Send a request through the router and parse the JSON response.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Log in with the configured test account and return the token.
    pub async fn login(&self) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "username": TEST_USERNAME,
                    "password": TEST_PASSWORD,
                })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::OK);
        response.body["token"]
            .as_str()
            .expect("Login response missing token")
            .to_string()
    }
}

/// Response from a test request
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

/// Configuration used by every integration test.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt_secret = TEST_JWT_SECRET.to_string();
    config.auth.jwt_ttl_minutes = 30;
    config.auth.username = TEST_USERNAME.to_string();
    config.auth.password = TEST_PASSWORD.to_string();
    config.database.url =
        std::env::var("TASKHUB_TEST_DATABASE_URL").unwrap_or_else(|_| config.database.url.clone());
    config
}
