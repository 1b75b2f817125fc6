//! Handlers for the browser flow.

mod shorten;
mod submit;

pub use shorten::{ShortenTemplate, shorten_handler};
pub use submit::submit_handler;
