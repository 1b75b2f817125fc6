#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::SqlitePool;
use std::sync::Arc;
use tiny_shortener::routes::app_router;
use tiny_shortener::state::AppState;

pub const BASE_URL: &str = "http://localhost:8080";

pub async fn insert_url(pool: &SqlitePool, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO shortenUrls (url) VALUES (?) RETURNING id")
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM shortenUrls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool), BASE_URL)
}

/// Full application router, as served in production.
pub fn create_test_server(pool: SqlitePool) -> TestServer {
    let app = app_router(create_test_state(pool), "static");
    TestServer::new(app).unwrap()
}
