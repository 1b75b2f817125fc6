//! Browser route configuration.

use crate::state::AppState;
use crate::web::handlers::{shorten_handler, submit_handler};
use axum::{
    Router,
    routing::{get, post},
};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Routes of the browser flow.
///
/// # Endpoints
///
/// - `GET  /`         - Submission form (`<static_dir>/index.html`)
/// - `POST /submit`   - Store a URL and redirect to its result page
/// - `GET  /shorten`  - Result page with the short link
/// - `GET  /static/*` - Static assets from `static_dir`
pub fn public_routes(static_dir: &str) -> Router<AppState> {
    let index = Path::new(static_dir).join("index.html");

    Router::new()
        .route_service("/", ServeFile::new(index))
        .route("/submit", post(submit_handler))
        .route("/shorten", get(shorten_handler))
        .nest_service("/static", ServeDir::new(static_dir))
}
