//! HTTP API layer: redirects, health checks and request middleware.
//!
//! # Modules
//!
//! - [`dto`] - Response payloads
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
