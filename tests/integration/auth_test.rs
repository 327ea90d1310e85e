//! Integration tests for the login endpoint.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": helpers::TEST_USERNAME,
                "password": helpers::TEST_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let token = response.body["token"].as_str().expect("missing token");
    // Three base64url segments
    assert_eq!(token.split('.').count(), 3);
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": helpers::TEST_USERNAME,
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "nobody",
                "password": helpers::TEST_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = helpers::TestApp::new();

    let bad_user = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({"username": "nobody", "password": "x"})),
            None,
        )
        .await;
    let bad_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": helpers::TEST_USERNAME,
                "password": "x",
            })),
            None,
        )
        .await;

    assert_eq!(bad_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(bad_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(bad_user.body["message"], bad_password.body["message"]);
    assert_eq!(bad_user.body["error"], bad_password.body["error"]);
}

#[tokio::test]
async fn test_login_blank_credentials_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({"username": "", "password": ""})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_body_shape() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({"username": "nobody", "password": "x"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.body["timestamp"].is_string());
    assert_eq!(response.body["status"], 401);
    assert_eq!(response.body["error"], "Unauthorized");
    assert!(response.body["details"].as_array().unwrap().is_empty());
}
