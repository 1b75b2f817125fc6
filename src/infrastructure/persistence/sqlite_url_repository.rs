//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// SQLite repository for shortened URLs.
///
/// Holds a shared pool; every call acquires a connection for the duration of
/// a single statement and returns it to the pool afterwards.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn insert(&self, url: &str) -> Result<(), AppError> {
        let result = sqlx::query("INSERT OR IGNORE INTO shortenUrls (url) VALUES (?)")
            .bind(url)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(url, "URL already stored");
        } else {
            tracing::info!(url, id = result.last_insert_rowid(), "Inserted url into database");
        }

        Ok(())
    }

    async fn find_id_by_url(&self, url: &str) -> Result<Option<i64>, AppError> {
        let id = sqlx::query_scalar::<_, i64>("SELECT id FROM shortenUrls WHERE url = ?")
            .bind(url)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(id)
    }

    async fn find_url_by_id(&self, id: i64) -> Result<Option<String>, AppError> {
        let url = sqlx::query_scalar::<_, String>("SELECT url FROM shortenUrls WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(url)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM shortenUrls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
