//! Permanent redirect helpers.
//!
//! `axum::response::Redirect::permanent` answers with 308; clients of this
//! service expect 301, so the response is assembled by hand.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::borrow::Cow;

use crate::error::AppError;

/// Builds a `301 Moved Permanently` response pointing at `location`.
///
/// ASCII control characters are percent-encoded first, since header values
/// cannot carry them and stored URLs are kept exactly as submitted.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the encoded location is still not a
/// valid header value.
pub fn moved_permanently(location: &str) -> Result<Response, AppError> {
    let encoded = encode_control_chars(location);
    let value = HeaderValue::from_str(&encoded).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid redirect target",
            json!({ "location": location }),
        )
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, value)]).into_response())
}

fn encode_control_chars(location: &str) -> Cow<'_, str> {
    if !location.chars().any(|c| c.is_ascii_control()) {
        return Cow::Borrowed(location);
    }

    let mut out = String::with_capacity(location.len() + 8);
    for c in location.chars() {
        if c.is_ascii_control() {
            out.push_str(&format!("%{:02X}", c as u32));
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Path of the shorten page for `long_url`, with the URL form-encoded
/// into the `url` query parameter.
pub fn shorten_page_location(long_url: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(long_url.as_bytes()).collect();
    format!("/shorten?url={}", encoded)
}
