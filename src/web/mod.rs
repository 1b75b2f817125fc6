//! Browser-facing layer: the submission form and the result page.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`forms`] - Form and query payloads
//! - [`handlers`] - Submit and shorten handlers
//! - [`routes`] - Route configuration

pub mod forms;
pub mod handlers;
pub mod routes;
