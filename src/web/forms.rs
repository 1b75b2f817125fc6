//! Form and query payloads for the browser flow.

use serde::Deserialize;
use validator::Validate;

/// Body of `POST /submit` (`application/x-www-form-urlencoded`).
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitForm {
    /// The long URL to shorten. Stored verbatim.
    #[serde(default)]
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
}

/// Query string of `GET /shorten`.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenQuery {
    #[serde(default)]
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
}
