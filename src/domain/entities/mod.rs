//! Core domain entities.
//!
//! - [`ShortenedUrl`] - A stored mapping from a numeric id to a long URL

pub mod shortened_url;

pub use shortened_url::ShortenedUrl;
