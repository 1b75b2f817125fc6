mod common;

use sqlx::SqlitePool;

#[sqlx::test]
async fn test_submit_shorten_redirect_scenario(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let submitted = server
        .post("/submit")
        .form(&[("url", "https://example.com/a")])
        .await;
    assert_eq!(submitted.status_code(), 301);
    assert_eq!(
        submitted.header("location"),
        "/shorten?url=https%3A%2F%2Fexample.com%2Fa"
    );

    let page = server
        .get("/shorten")
        .add_query_param("url", "https://example.com/a")
        .await;
    page.assert_status_ok();
    assert!(page.text().contains("http://localhost:8080/r/1"));

    let redirected = server.get("/r/1").await;
    assert_eq!(redirected.status_code(), 301);
    assert_eq!(redirected.header("location"), "https://example.com/a");

    // Same URL again keeps id 1.
    server
        .post("/submit")
        .form(&[("url", "https://example.com/a")])
        .await;
    let page = server
        .get("/shorten")
        .add_query_param("url", "https://example.com/a")
        .await;
    assert!(page.text().contains("http://localhost:8080/r/1"));

    server
        .post("/submit")
        .form(&[("url", "https://example.com/b")])
        .await;
    let page = server
        .get("/shorten")
        .add_query_param("url", "https://example.com/b")
        .await;
    assert!(page.text().contains("http://localhost:8080/r/2"));

    let redirected = server.get("/r/2").await;
    assert_eq!(redirected.header("location"), "https://example.com/b");
}

#[sqlx::test]
async fn test_unknown_id_is_not_found(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server.get("/r/999").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_get_submit_is_method_not_allowed(pool: SqlitePool) {
    let server = common::create_test_server(pool.clone());

    let response = server.get("/submit").await;

    assert_eq!(response.status_code(), 405);
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_index_serves_form(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<form"));
    assert!(html.contains("action=\"/submit\""));
    assert!(html.contains("name=\"url\""));
}

#[sqlx::test]
async fn test_static_assets(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server.get("/static/style.css").await;

    response.assert_status_ok();
}

#[sqlx::test]
async fn test_health_route(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server.get("/health").await;

    response.assert_status_ok();
}
