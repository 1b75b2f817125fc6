//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`database`] - SQLite pool creation and schema bootstrap
//! - [`persistence`] - SQLite repository implementations

pub mod database;
pub mod persistence;
