mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use axum_test::multipart::MultipartForm;
use sqlx::SqlitePool;
use tiny_shortener::web::handlers::submit_handler;

fn submit_app(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/submit", post(submit_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_submit_inserts_and_redirects(pool: SqlitePool) {
    let server = submit_app(pool.clone());

    let response = server
        .post("/submit")
        .form(&[("url", "https://example.com/a")])
        .await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(
        response.header("location"),
        "/shorten?url=https%3A%2F%2Fexample.com%2Fa"
    );
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[sqlx::test]
async fn test_submit_same_url_twice_keeps_one_row(pool: SqlitePool) {
    let server = submit_app(pool.clone());

    for _ in 0..2 {
        let response = server
            .post("/submit")
            .form(&[("url", "https://example.com/a")])
            .await;
        assert_eq!(response.status_code(), 301);
    }

    assert_eq!(common::count_urls(&pool).await, 1);
}

#[sqlx::test]
async fn test_submit_preserves_query_characters(pool: SqlitePool) {
    let server = submit_app(pool.clone());

    let response = server
        .post("/submit")
        .form(&[("url", "https://example.com/?q=1&r=2")])
        .await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(
        response.header("location"),
        "/shorten?url=https%3A%2F%2Fexample.com%2F%3Fq%3D1%26r%3D2"
    );

    let stored: String = sqlx::query_scalar("SELECT url FROM shortenUrls WHERE id = 1")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, "https://example.com/?q=1&r=2");
}

#[sqlx::test]
async fn test_submit_missing_url_is_bad_request(pool: SqlitePool) {
    let server = submit_app(pool.clone());

    let response = server.post("/submit").form(&[("other", "value")]).await;

    response.assert_status_bad_request();
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_submit_empty_url_is_bad_request(pool: SqlitePool) {
    let server = submit_app(pool.clone());

    let response = server.post("/submit").form(&[("url", "")]).await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_submit_via_get_is_rejected(pool: SqlitePool) {
    let server = submit_app(pool.clone());

    let response = server
        .get("/submit")
        .add_query_param("url", "https://example.com/a")
        .await;

    assert_eq!(response.status_code(), 405);
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_submit_with_newline_still_redirects(pool: SqlitePool) {
    let server = submit_app(pool.clone());

    let response = server
        .post("/submit")
        .form(&[("url", "https://example.com/a\nb")])
        .await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(
        response.header("location"),
        "/shorten?url=https%3A%2F%2Fexample.com%2Fa%0Ab"
    );

    let redirect = common::create_test_server(pool).get("/r/1").await;
    assert_eq!(redirect.status_code(), 301);
    assert_eq!(redirect.header("location"), "https://example.com/a%0Ab");
}

#[sqlx::test]
async fn test_submit_multipart_is_unsupported(pool: SqlitePool) {
    let server = submit_app(pool.clone());

    let form = MultipartForm::new().add_text("url", "https://example.com/a");
    let response = server.post("/submit").multipart(form).await;

    assert_eq!(response.status_code(), 415);
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_submit_database_failure_is_internal_error(pool: SqlitePool) {
    let server = submit_app(pool.clone());
    pool.close().await;

    let response = server
        .post("/submit")
        .form(&[("url", "https://example.com/a")])
        .await;

    assert_eq!(response.status_code(), 500);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
}
