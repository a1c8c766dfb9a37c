//! Document store abstraction
//!
//! Entities are persisted as JSON documents grouped into named collections.
//! Backends only deal in `serde_json::Value`; typing happens one layer up in
//! [`crate::repository::DocumentRepository`].

use async_trait::async_trait;
use serde_json::Value;
use sports_manager_common::RepositoryError;
use uuid::Uuid;

/// Named document collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Managers,
    Players,
    Teams,
    Sports,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Managers => "managers",
            Collection::Players => "players",
            Collection::Teams => "teams",
            Collection::Sports => "sports",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage backend for JSON documents.
///
/// Every operation touches a single document; there are no multi-document
/// transactions. `find_all` and `find_by_field` return documents in
/// insertion order.
///
/// `unique_fields` names top-level fields whose value no other document in
/// the collection may share. Backends check them atomically with the write.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a new document. Fails with `AlreadyExists` when `id` is taken
    /// or a unique field value is already held.
    async fn insert(
        &self,
        collection: Collection,
        id: Uuid,
        body: Value,
        unique_fields: &[&str],
    ) -> Result<(), RepositoryError>;

    async fn find_by_id(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Value>, RepositoryError>;

    async fn find_all(&self, collection: Collection) -> Result<Vec<Value>, RepositoryError>;

    /// Documents whose top-level `field` equals `value`
    async fn find_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Value>, RepositoryError>;

    /// Replace the body of an existing document. Returns `false` when no
    /// document has `id`.
    async fn replace(
        &self,
        collection: Collection,
        id: Uuid,
        body: Value,
        unique_fields: &[&str],
    ) -> Result<bool, RepositoryError>;

    /// Remove a document. Returns `false` when no document has `id`.
    async fn delete(&self, collection: Collection, id: Uuid) -> Result<bool, RepositoryError>;
}
