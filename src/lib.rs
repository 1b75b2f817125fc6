//! # Tiny Shortener
//!
//! A minimal URL shortening service built with Axum and SQLite.
//!
//! A long URL submitted through the form is stored once; the database's
//! auto-increment key becomes its short identifier and `/r/{id}` redirects
//! back to it with `301 Moved Permanently`.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Core entity and repository trait
//! - **Application Layer** ([`application`]) - Registration and resolution logic
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, schema bootstrap, repository
//! - **API Layer** ([`api`]) - Redirect and health handlers, middleware
//! - **Web Layer** ([`web`]) - Submission form and result page
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_PATH="./db/shorten.db"   # Optional
//! cargo run -- --port 8080
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlService;
    pub use crate::domain::entities::ShortenedUrl;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
