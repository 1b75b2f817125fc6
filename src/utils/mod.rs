//! Helper functions used across the HTTP layer.
//!
//! - [`redirect`] - Permanent redirect responses and redirect targets

pub mod redirect;
