//! Session token issuing, validation and header extraction

use axum::http::HeaderValue;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::claims::SessionClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Issues and validates HS256 session tokens.
///
/// Validity depends only on the signature, the `exp` claim and the clock
/// passed to [`TokenIssuer::validate_at`]; tokens carry no server-side state.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    config: AuthConfig,
}

impl TokenIssuer {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Issue a token for `subject`, valid from now for the configured TTL
    pub fn issue(&self, subject: Uuid) -> Result<String, AuthError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as if the current time were `issued_at`
    pub fn issue_at(&self, subject: Uuid, issued_at: DateTime<Utc>) -> Result<String, AuthError> {
        let expires_at = issued_at + Duration::seconds(self.config.token_ttl_secs);
        let claims = SessionClaims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.config.jwt_secret.as_ref());
        encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
            tracing::error!(error = %e, "JWT encoding failed");
            AuthError::TokenIssueFailed
        })
    }

    /// Validate a token against the current time and return its subject
    pub fn validate(&self, token: &str) -> Result<Uuid, AuthError> {
        self.validate_at(token, Utc::now())
    }

    /// Validate a token against `now` and return its subject.
    ///
    /// A bad signature or malformed token is `InvalidToken`; a token whose
    /// `exp` is not after `now` is `TokenExpired`.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<Uuid, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked below against the caller's clock
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let decoding_key = DecodingKey::from_secret(self.config.jwt_secret.as_ref());
        let token_data =
            decode::<SessionClaims>(token, &decoding_key, &validation).map_err(|e| {
                tracing::debug!(error = %e, "JWT validation failed");
                AuthError::InvalidToken
            })?;

        if now.timestamp() >= token_data.claims.exp {
            return Err(AuthError::TokenExpired);
        }

        Uuid::parse_str(&token_data.claims.sub).map_err(|_| AuthError::InvalidToken)
    }
}

/// Extract bearer token from Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    match header_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(AuthError::InvalidAuthorizationFormat),
    }
}
