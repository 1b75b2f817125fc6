//! SQLite connection pool and schema bootstrap.
//!
//! [`connect`] is the only way the service obtains database access. It makes
//! sure the database file exists, opens a pool sized from [`Config`], and
//! applies the embedded schema before anything else touches the pool.

use crate::config::Config;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::path::Path;
use std::time::Duration;

/// Schema scripts embedded at compile time from `./migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens the connection pool and bootstraps the schema.
///
/// Creates the parent directory and the database file when they are missing.
/// The schema script is safe to apply on every start.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, the database cannot
/// be opened, or the schema cannot be applied. Callers treat this as fatal.
pub async fn connect(config: &Config) -> Result<SqlitePool> {
    let path = Path::new(&config.database_path);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create database directory {}", parent.display())
        })?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to open database {}", path.display()))?;

    tracing::info!(path = %path.display(), "Connected to database");

    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to apply database schema")?;

    tracing::info!("Database schema ready");

    Ok(pool)
}
