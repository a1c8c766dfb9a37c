//! Password hashing shared across Sports Manager crates
//!
//! Digests are bcrypt strings (`$2b$<cost>$<salt+hash>`), so the salt and
//! work factor travel with the digest.

use crate::error::{Error, Result};

/// bcrypt work factor for new digests
pub const PASSWORD_HASH_COST: u32 = 10;

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(plaintext: &str) -> Result<String> {
    bcrypt::hash(plaintext, PASSWORD_HASH_COST).map_err(|e| {
        tracing::error!(error = %e, "Password hashing failed");
        Error::Internal("Failed to hash password".to_string())
    })
}

/// Verify a plaintext password against a stored digest.
///
/// Returns `false` on mismatch and on a malformed digest.
pub fn verify_password(plaintext: &str, stored_digest: &str) -> bool {
    bcrypt::verify(plaintext, stored_digest).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Stored password digest is unreadable");
        false
    })
}
