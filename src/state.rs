//! Shared application state injected into all handlers.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::UrlService;
use crate::infrastructure::persistence::SqliteUrlRepository;

/// Concrete service type wired at startup.
pub type AppUrlService = UrlService<SqliteUrlRepository>;

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<AppUrlService>,
}

impl AppState {
    /// Wires the repository and service on top of a shared pool.
    ///
    /// `base_url` prefixes every short link rendered by the service.
    pub fn new(pool: Arc<SqlitePool>, base_url: impl Into<String>) -> Self {
        let url_repository = Arc::new(SqliteUrlRepository::new(pool));
        let url_service = Arc::new(UrlService::new(url_repository, base_url));

        Self { url_service }
    }
}
