//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Response,
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::redirect::moved_permanently;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /r/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not a canonical decimal integer.
/// Returns 404 Not Found if no URL is stored under `id`.
/// Returns 500 Internal Server Error on database errors.
pub async fn redirect_handler(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let id = parse_id(&raw_id).ok_or_else(|| {
        AppError::bad_request(
            "Short link id must be an integer",
            json!({ "id": raw_id }),
        )
    })?;

    let long_url = state.url_service.resolve(id).await?;
    debug!(id, long_url = %long_url, "Redirecting");

    moved_permanently(&long_url)
}

/// Parses an id written as plain ASCII digits without a sign or leading
/// zeros, so every row has exactly one short path.
fn parse_id(raw: &str) -> Option<i64> {
    let canonical = !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && (raw == "0" || !raw.starts_with('0'));
    if !canonical {
        return None;
    }
    raw.parse().ok()
}
