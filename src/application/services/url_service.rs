//! Short link registration and resolution service.

use std::sync::Arc;

use crate::domain::entities::ShortenedUrl;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for registering long URLs and resolving short identifiers.
///
/// URLs are stored verbatim. The database assigns identifiers and enforces
/// uniqueness, so registering the same URL twice keeps a single id.
pub struct UrlService<R: UrlRepository> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: UrlRepository> UrlService<R> {
    /// Creates a new URL service.
    ///
    /// `base_url` is the scheme/host/port prefix of generated short links.
    pub fn new(repository: Arc<R>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Stores a long URL unless it is already known.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn register(&self, long_url: &str) -> Result<(), AppError> {
        if long_url.is_empty() {
            return Err(AppError::bad_request(
                "URL must not be empty",
                json!({ "field": "url" }),
            ));
        }

        self.repository.insert(long_url).await
    }

    /// Looks up the stored mapping for a long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the URL was never registered.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn lookup(&self, long_url: &str) -> Result<ShortenedUrl, AppError> {
        self.repository
            .find_id_by_url(long_url)
            .await?
            .map(|id| ShortenedUrl::new(id, long_url.to_string()))
            .ok_or_else(|| AppError::not_found("URL has not been shortened", json!({ "url": long_url })))
    }

    /// Registers a long URL and returns its mapping.
    ///
    /// # Errors
    ///
    /// See [`Self::register`]. Returns [`AppError::Internal`] if the row
    /// cannot be read back after the insert.
    pub async fn shorten(&self, long_url: &str) -> Result<ShortenedUrl, AppError> {
        self.register(long_url).await?;

        match self.lookup(long_url).await {
            Err(AppError::NotFound { .. }) => Err(AppError::internal(
                "Stored URL could not be read back",
                json!({ "url": long_url }),
            )),
            other => other,
        }
    }

    /// Resolves a short identifier to its long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no URL is stored under `id`.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, id: i64) -> Result<String, AppError> {
        self.repository
            .find_url_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "id": id })))
    }

    /// Number of stored URLs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Constructs the full short URL, e.g. `http://localhost:8080/r/1`.
    pub fn short_url(&self, entry: &ShortenedUrl) -> String {
        format!("{}{}", self.base_url, entry.short_path())
    }
}
