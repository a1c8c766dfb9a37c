//! Authentication for the Sports Manager API
//!
//! Issues and validates session tokens for managers and provides an axum
//! extractor that works with any domain state implementing `FromRef<S>`
//! for `TokenIssuer`.

mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod jwt;

pub use claims::SessionClaims;
pub use config::{AuthConfig, DEFAULT_TOKEN_TTL_SECS};
pub use context::AuthContext;
pub use error::{AuthError, ACCESS_FORBIDDEN};
pub use extractors::AuthManager;
pub use jwt::TokenIssuer;
