//! Top-level router configuration combining API and browser routes.
//!
//! # Route Structure
//!
//! - `GET  /`          - Submission form
//! - `POST /submit`    - Store a URL, redirect to its result page
//! - `GET  /shorten`   - Result page with the short link
//! - `GET  /r/{id}`    - Short link redirect (301)
//! - `GET  /health`    - Health check
//! - `/static/*`       - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory holding `index.html` and other static assets
pub fn app_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/r/{id}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(web::routes::public_routes(static_dir))
        .with_state(state)
        .layer(tracing::layer())
}
