//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sports_manager_common::{Error, INTERNAL_ERROR_MESSAGE};

/// Message for every rejected protected request
pub const ACCESS_FORBIDDEN: &str = "Access forbidden";

/// Authentication error
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Missing authorization header")]
    MissingAuthorization,

    #[error("Authorization header is not a bearer token")]
    InvalidAuthorizationFormat,

    /// Signature mismatch, malformed token or unusable subject
    #[error("Invalid session token")]
    InvalidToken,

    #[error("Session token expired")]
    TokenExpired,

    #[error("Failed to issue session token")]
    TokenIssueFailed,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::TokenIssueFailed => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::FORBIDDEN,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingAuthorization => "MISSING_AUTHORIZATION",
            AuthError::InvalidAuthorizationFormat => "INVALID_AUTHORIZATION",
            AuthError::InvalidToken => "INVALID_TOKEN",
            AuthError::TokenExpired => "TOKEN_EXPIRED",
            AuthError::TokenIssueFailed => "TOKEN_ISSUE_FAILED",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Token issuing failed");
            INTERNAL_ERROR_MESSAGE
        } else {
            ACCESS_FORBIDDEN
        };

        let body = Json(json!({
            "error": {
                "code": self.error_code(),
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::TokenIssueFailed => Error::Internal("Failed to issue token".to_string()),
            _ => Error::Authorization(ACCESS_FORBIDDEN.to_string()),
        }
    }
}
