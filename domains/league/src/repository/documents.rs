//! Typed repository over a document collection

use serde_json::Value;
use sports_manager_common::RepositoryError;
use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;

use super::store::DocumentStore;
use crate::domain::entities::Document;

/// CRUD access to the collection of `E`
pub struct DocumentRepository<E: Document> {
    store: Arc<dyn DocumentStore>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Document> Clone for DocumentRepository<E> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _entity: PhantomData,
        }
    }
}

impl<E: Document> DocumentRepository<E> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// Insert a new entity. Fails with `AlreadyExists` when one of
    /// `E::UNIQUE_FIELDS` is already taken.
    pub async fn insert(&self, entity: E) -> Result<E, RepositoryError> {
        let body = serde_json::to_value(&entity)?;
        self.store
            .insert(E::COLLECTION, entity.id(), body, E::UNIQUE_FIELDS)
            .await?;
        Ok(entity)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<E>, RepositoryError> {
        self.store
            .find_by_id(E::COLLECTION, id)
            .await?
            .map(decode)
            .transpose()
    }

    /// Every entity in the collection, in insertion order
    pub async fn find_all(&self) -> Result<Vec<E>, RepositoryError> {
        self.store
            .find_all(E::COLLECTION)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    /// Entities whose top-level `field` equals `value`
    pub async fn find_by_field(
        &self,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<Vec<E>, RepositoryError> {
        let value = value.into();
        self.store
            .find_by_field(E::COLLECTION, field, &value)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    /// Replace the stored entity with `entity`, keeping `id`.
    ///
    /// Returns `None` when nothing is stored under `id`.
    pub async fn update_by_id(&self, id: Uuid, entity: E) -> Result<Option<E>, RepositoryError> {
        let mut body = serde_json::to_value(&entity)?;
        if let Value::Object(fields) = &mut body {
            fields.insert("id".to_string(), Value::String(id.to_string()));
        }

        if !self
            .store
            .replace(E::COLLECTION, id, body.clone(), E::UNIQUE_FIELDS)
            .await?
        {
            return Ok(None);
        }

        decode(body).map(Some)
    }

    /// Remove the entity. Returns `false` when nothing is stored under `id`.
    pub async fn delete_by_id(&self, id: Uuid) -> Result<bool, RepositoryError> {
        self.store.delete(E::COLLECTION, id).await
    }
}

fn decode<E: Document>(body: Value) -> Result<E, RepositoryError> {
    Ok(serde_json::from_value(body)?)
}
