//! Example API - A minimal HTTP API demonstrating declarative request validation
//!
//! This library exposes two endpoints on a single `/example` resource (fetch
//! by id, create) backed by an explicit per-field validation registry that is
//! built at startup and applied uniformly before the create handler runs.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod server;
pub mod validation;

#[cfg(test)]
mod tests;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use server::ExampleApiServer;

/// Application result type
pub type Result<T> = std::result::Result<T, error::AppError>;
