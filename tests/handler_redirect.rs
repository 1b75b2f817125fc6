mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::SqlitePool;
use tiny_shortener::api::handlers::redirect_handler;

fn redirect_app(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/r/{id}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_redirect_success(pool: SqlitePool) {
    let id = common::insert_url(&pool, "https://example.com/target").await;
    let server = redirect_app(pool);

    let response = server.get(&format!("/r/{}", id)).await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_not_found(pool: SqlitePool) {
    let server = redirect_app(pool);

    let response = server.get("/r/42").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["id"], 42);
}

#[sqlx::test]
async fn test_redirect_non_numeric_id(pool: SqlitePool) {
    let server = redirect_app(pool);

    let response = server.get("/r/abc").await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_redirect_zero_is_not_found(pool: SqlitePool) {
    common::insert_url(&pool, "https://example.com").await;
    let server = redirect_app(pool);

    let response = server.get("/r/0").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_redirect_rejects_non_canonical_ids(pool: SqlitePool) {
    common::insert_url(&pool, "https://example.com").await;
    let server = redirect_app(pool);

    for raw in ["+1", "01", "-1"] {
        let response = server.get(&format!("/r/{}", raw)).await;
        response.assert_status_bad_request();
    }
}

#[sqlx::test]
async fn test_redirect_encodes_control_characters(pool: SqlitePool) {
    let id = common::insert_url(&pool, "https://example.com/a\nb").await;
    let server = redirect_app(pool);

    let response = server.get(&format!("/r/{}", id)).await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(response.header("location"), "https://example.com/a%0Ab");
}

#[sqlx::test]
async fn test_redirect_database_failure_is_internal_error(pool: SqlitePool) {
    common::insert_url(&pool, "https://example.com").await;
    let server = redirect_app(pool.clone());
    pool.close().await;

    let response = server.get("/r/1").await;

    assert_eq!(response.status_code(), 500);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
}
