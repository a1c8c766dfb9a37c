//! PostgreSQL document store
//!
//! All collections share the `documents` table (see `migrations/`). Field
//! lookups use JSONB containment so they are served by the GIN index.
//! Unique fields are enforced by unique indexes in the schema, so the
//! `unique_fields` argument is only informational here.

use async_trait::async_trait;
use serde_json::{Map, Value};
use sports_manager_common::RepositoryError;
use sqlx::PgPool;
use uuid::Uuid;

use super::store::{Collection, DocumentStore};

/// Embedded schema migrations
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        MIGRATOR.run(&self.pool).await
    }
}

/// Map a unique-index violation to `AlreadyExists`
fn map_insert_error(collection: Collection, err: sqlx::Error) -> RepositoryError {
    let is_unique_violation = err
        .as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation());

    if is_unique_violation {
        RepositoryError::AlreadyExists(format!("{} document already exists", collection))
    } else {
        RepositoryError::Connection(err)
    }
}

/// `{field: value}`, the containment filter for a top-level field match
fn field_filter(field: &str, value: &Value) -> Value {
    let mut filter = Map::new();
    filter.insert(field.to_string(), value.clone());
    Value::Object(filter)
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(
        &self,
        collection: Collection,
        id: Uuid,
        body: Value,
        _unique_fields: &[&str],
    ) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)")
            .bind(collection.as_str())
            .bind(id)
            .bind(body)
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error(collection, e))?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Value>, RepositoryError> {
        let body = sqlx::query_scalar::<_, Value>(
            "SELECT body FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(body)
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<Value>, RepositoryError> {
        let bodies = sqlx::query_scalar::<_, Value>(
            r#"
            SELECT body FROM documents
            WHERE collection = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(collection.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(bodies)
    }

    async fn find_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Value>, RepositoryError> {
        let bodies = sqlx::query_scalar::<_, Value>(
            r#"
            SELECT body FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(collection.as_str())
        .bind(field_filter(field, value))
        .fetch_all(&self.pool)
        .await?;

        Ok(bodies)
    }

    async fn replace(
        &self,
        collection: Collection,
        id: Uuid,
        body: Value,
        _unique_fields: &[&str],
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE documents
            SET body = $3, updated_at = NOW()
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(collection.as_str())
        .bind(id)
        .bind(body)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(collection, e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, collection: Collection, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
