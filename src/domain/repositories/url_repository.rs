//! Repository trait for shortened URL data access.

use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for shortened URLs.
///
/// Absence is reported as `Ok(None)`; storage failures are reported as
/// [`AppError::Internal`], never as absence.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores `url` unless it is already present.
    ///
    /// Re-inserting a known URL is a silent no-op and keeps its original id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, url: &str) -> Result<(), AppError>;

    /// Finds the id assigned to `url` (byte-exact, case-sensitive match).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_id_by_url(&self, url: &str) -> Result<Option<i64>, AppError>;

    /// Finds the long URL stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_url_by_id(&self, id: i64) -> Result<Option<String>, AppError>;

    /// Counts stored URLs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
