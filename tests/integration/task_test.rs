//! Integration tests for task CRUD. These require a running PostgreSQL
//! (set `TASKHUB_TEST_DATABASE_URL` to point at it).

mod helpers;

use http::StatusCode;

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_create_and_get_task() {
    let app = helpers::TestApp::with_database().await;
    let token = app.login().await;

    let created = app
        .request(
            "POST",
            "/api/tasks",
            Some(serde_json::json!({
                "title": "Write release notes",
                "description": "For the 1.2 release",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["title"], "Write release notes");
    assert_eq!(created.body["status"], "PENDING");

    let id = created.body["id"].as_i64().unwrap();
    let fetched = app
        .request("GET", &format!("/api/tasks/{id}"), None, Some(&token))
        .await;

    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["id"], id);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_get_unknown_task_is_404() {
    let app = helpers::TestApp::with_database().await;
    let token = app.login().await;

    let response = app
        .request("GET", "/api/tasks/999999", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_create_without_title_is_400() {
    let app = helpers::TestApp::with_database().await;
    let token = app.login().await;

    let response = app
        .request(
            "POST",
            "/api/tasks",
            Some(serde_json::json!({"title": ""})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(!response.body["details"].as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_update_replaces_all_fields() {
    let app = helpers::TestApp::with_database().await;
    let token = app.login().await;

    let created = app
        .request(
            "POST",
            "/api/tasks",
            Some(serde_json::json!({
                "title": "Old title",
                "description": "Old description",
                "status": "IN_PROGRESS",
            })),
            Some(&token),
        )
        .await;
    let id = created.body["id"].as_i64().unwrap();

    // Omitting description and status resets them.
    let updated = app
        .request(
            "PUT",
            &format!("/api/tasks/{id}"),
            Some(serde_json::json!({"title": "New title"})),
            Some(&token),
        )
        .await;

    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["title"], "New title");
    assert_eq!(updated.body["description"], serde_json::Value::Null);
    assert_eq!(updated.body["status"], "PENDING");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_patch_keeps_absent_fields() {
    let app = helpers::TestApp::with_database().await;
    let token = app.login().await;

    let created = app
        .request(
            "POST",
            "/api/tasks",
            Some(serde_json::json!({
                "title": "Keep me",
                "description": "Keep this too",
            })),
            Some(&token),
        )
        .await;
    let id = created.body["id"].as_i64().unwrap();

    let patched = app
        .request(
            "PATCH",
            &format!("/api/tasks/{id}"),
            Some(serde_json::json!({"status": "COMPLETED"})),
            Some(&token),
        )
        .await;

    assert_eq!(patched.status, StatusCode::OK);
    assert_eq!(patched.body["title"], "Keep me");
    assert_eq!(patched.body["description"], "Keep this too");
    assert_eq!(patched.body["status"], "COMPLETED");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_patch_blank_status_is_400() {
    let app = helpers::TestApp::with_database().await;
    let token = app.login().await;

    let created = app
        .request(
            "POST",
            "/api/tasks",
            Some(serde_json::json!({"title": "t"})),
            Some(&token),
        )
        .await;
    let id = created.body["id"].as_i64().unwrap();

    let response = app
        .request(
            "PATCH",
            &format!("/api/tasks/{id}"),
            Some(serde_json::json!({"status": ""})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_delete_task() {
    let app = helpers::TestApp::with_database().await;
    let token = app.login().await;

    let created = app
        .request(
            "POST",
            "/api/tasks",
            Some(serde_json::json!({"title": "Doomed"})),
            Some(&token),
        )
        .await;
    let id = created.body["id"].as_i64().unwrap();

    let deleted = app
        .request("DELETE", &format!("/api/tasks/{id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let gone = app
        .request("GET", &format!("/api/tasks/{id}"), None, Some(&token))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_search_filters_and_pagination() {
    let app = helpers::TestApp::with_database().await;
    let token = app.login().await;

    for i in 0..3 {
        let status = if i == 0 { "COMPLETED" } else { "PENDING" };
        app.request(
            "POST",
            "/api/tasks",
            Some(serde_json::json!({"title": format!("task {i}"), "status": status})),
            Some(&token),
        )
        .await;
    }

    let all = app.request("GET", "/api/tasks", None, Some(&token)).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body["total_items"], 3);
    assert_eq!(all.body["page"], 0);
    assert_eq!(all.body["size"], 20);

    let completed = app
        .request("GET", "/api/tasks?status=COMPLETED", None, Some(&token))
        .await;
    assert_eq!(completed.body["total_items"], 1);

    let paged = app
        .request("GET", "/api/tasks?page=1&size=2", None, Some(&token))
        .await;
    assert_eq!(paged.body["items"].as_array().unwrap().len(), 1);
    assert_eq!(paged.body["total_pages"], 2);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_search_orders_newest_first() {
    let app = helpers::TestApp::with_database().await;
    let token = app.login().await;

    for i in 0..2 {
        app.request(
            "POST",
            "/api/tasks",
            Some(serde_json::json!({"title": format!("task {i}")})),
            Some(&token),
        )
        .await;
    }

    let all = app.request("GET", "/api/tasks", None, Some(&token)).await;
    let items = all.body["items"].as_array().unwrap();
    assert_eq!(items[0]["title"], "task 1");
    assert_eq!(items[1]["title"], "task 0");
}
