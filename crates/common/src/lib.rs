//! Shared utilities, configuration, and error handling for Sports Manager
//!
//! This crate provides common functionality used across the Sports Manager API:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Validated JSON extraction
//! - Password hashing

pub mod config;
pub mod crypto;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::{AppEnv, Config, StoreBackend};
pub use crypto::{hash_password, verify_password};
pub use db::RepositoryError;
pub use error::{Error, Result, INTERNAL_ERROR_MESSAGE, INVALID_CREDENTIALS_MESSAGE};
pub use extractors::ValidatedJson;
