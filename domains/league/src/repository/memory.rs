//! In-process document store

use async_trait::async_trait;
use serde_json::Value;
use sports_manager_common::RepositoryError;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::store::{Collection, DocumentStore};

/// `DocumentStore` kept in memory. Used by tests and `STORE_BACKEND=memory`.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<Collection, Vec<(Uuid, Value)>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// First unique field whose value in `body` is held by a document other than `id`
fn unique_conflict<'f>(
    documents: &[(Uuid, Value)],
    id: Uuid,
    body: &Value,
    unique_fields: &[&'f str],
) -> Option<&'f str> {
    unique_fields.iter().copied().find(|field| {
        body.get(*field).is_some_and(|value| {
            documents
                .iter()
                .any(|(existing, stored)| *existing != id && stored.get(*field) == Some(value))
        })
    })
}

fn unique_violation(field: &str) -> RepositoryError {
    RepositoryError::AlreadyExists(format!("{} already exists", field))
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(
        &self,
        collection: Collection,
        id: Uuid,
        body: Value,
        unique_fields: &[&str],
    ) -> Result<(), RepositoryError> {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection).or_default();
        if documents.iter().any(|(existing, _)| *existing == id) {
            return Err(RepositoryError::AlreadyExists(format!(
                "{} document {} already exists",
                collection, id
            )));
        }
        if let Some(field) = unique_conflict(documents, id, &body, unique_fields) {
            return Err(unique_violation(field));
        }
        documents.push((id, body));
        Ok(())
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Value>, RepositoryError> {
        let collections = self.collections.read().await;
        Ok(collections.get(&collection).and_then(|documents| {
            documents
                .iter()
                .find(|(existing, _)| *existing == id)
                .map(|(_, body)| body.clone())
        }))
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<Value>, RepositoryError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .map(|documents| documents.iter().map(|(_, body)| body.clone()).collect())
            .unwrap_or_default())
    }

    async fn find_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Value>, RepositoryError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|(_, body)| body.get(field) == Some(value))
                    .map(|(_, body)| body.clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn replace(
        &self,
        collection: Collection,
        id: Uuid,
        body: Value,
        unique_fields: &[&str],
    ) -> Result<bool, RepositoryError> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(&collection) else {
            return Ok(false);
        };
        let Some(slot) = documents.iter().position(|(existing, _)| *existing == id) else {
            return Ok(false);
        };
        if let Some(field) = unique_conflict(documents, id, &body, unique_fields) {
            return Err(unique_violation(field));
        }

        documents[slot].1 = body;
        Ok(true)
    }

    async fn delete(&self, collection: Collection, id: Uuid) -> Result<bool, RepositoryError> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(&collection) else {
            return Ok(false);
        };

        let before = documents.len();
        documents.retain(|(existing, _)| *existing != id);
        Ok(documents.len() != before)
    }
}
