//! Shortened URL entity.

/// A stored mapping between a short identifier and the original URL.
///
/// The `id` is assigned by the database on insert and never reused, so it
/// doubles as the short code in `/r/{id}`. Both columns are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub id: i64,
    pub url: String,
}

impl ShortenedUrl {
    /// Creates a new ShortenedUrl instance.
    pub fn new(id: i64, url: String) -> Self {
        Self { id, url }
    }

    /// Path component of the short link, e.g. `/r/42`.
    pub fn short_path(&self) -> String {
        format!("/r/{}", self.id)
    }
}
