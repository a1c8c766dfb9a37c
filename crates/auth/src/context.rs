//! Authorization context for authenticated managers

use uuid::Uuid;

/// Represents an authenticated manager, decoded from a session token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    pub manager_id: Uuid,
}

impl AuthContext {
    pub fn new(manager_id: Uuid) -> Self {
        Self { manager_id }
    }

    /// Whether the token subject is the manager `id`
    pub fn is_manager(&self, id: Uuid) -> bool {
        self.manager_id == id
    }
}
