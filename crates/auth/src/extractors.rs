//! Axum extractors for authentication
//!
//! Generic over any state `S` where `TokenIssuer: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt::{extract_bearer_token, TokenIssuer};

/// Authenticated manager extractor (Bearer JWT).
///
/// Adding it to a handler's arguments makes the route protected: the
/// request is rejected with 403 before the handler body runs.
#[derive(Debug)]
pub struct AuthManager(pub AuthContext);

impl<S> FromRequestParts<S> for AuthManager
where
    TokenIssuer: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let issuer = TokenIssuer::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthorization)?;

        let token = extract_bearer_token(auth_header)?;
        let manager_id = issuer.validate(&token).map_err(|e| {
            tracing::debug!(error = %e, "Rejected session token");
            e
        })?;

        Ok(AuthManager(AuthContext::new(manager_id)))
    }
}
