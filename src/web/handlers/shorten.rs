//! Result page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::ShortenQuery;

/// Template for the result page.
///
/// Renders `templates/shorten.html` with the short link and the original URL.
#[derive(Template, WebTemplate)]
#[template(path = "shorten.html")]
pub struct ShortenTemplate {
    pub short_url: String,
    pub long_url: String,
}

/// Renders the short link for an already submitted URL.
///
/// # Endpoint
///
/// `GET /shorten?url=<url>`
///
/// Nothing is inserted here; the URL must have gone through `/submit` first.
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing or empty.
/// Returns 404 Not Found if the URL was never submitted.
/// Returns 500 Internal Server Error on database errors.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Query(query): Query<ShortenQuery>,
) -> Result<ShortenTemplate, AppError> {
    query.validate()?;

    let entry = state.url_service.lookup(&query.url).await?;

    Ok(ShortenTemplate {
        short_url: state.url_service.short_url(&entry),
        long_url: entry.url,
    })
}
