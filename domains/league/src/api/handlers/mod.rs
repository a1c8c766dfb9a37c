//! HTTP handlers for the league domain

pub mod admin;
pub mod managers;
pub mod players;
pub mod sports;
pub mod teams;

use serde::{Deserialize, Serialize};
use sports_manager_common::{Error, Result};
use uuid::Uuid;

/// Body returned by successful deletes
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn success() -> Self {
        Self {
            message: "Success".to_string(),
        }
    }
}

/// Parse a path id. A value that is not a UUID cannot name any resource.
pub(crate) fn parse_id(raw: &str, resource: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| not_found(resource))
}

pub(crate) fn not_found(resource: &str) -> Error {
    Error::NotFound(format!("{} not found", resource))
}
