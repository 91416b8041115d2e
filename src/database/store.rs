use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

/// JSON object body of a stored document, without `_id`/`createdAt`.
pub type Fields = Map<String, Value>;

/// Errors surfaced by any document store backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Duplicate value for {collection}.{field}")]
    Duplicate {
        collection: &'static str,
        field: &'static str,
    },

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Stored document could not be decoded: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Static description of a collection: its name and the body fields that must
/// be unique across documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSpec {
    pub name: &'static str,
    pub unique: &'static [&'static str],
}

impl CollectionSpec {
    pub const fn new(name: &'static str) -> Self {
        Self { name, unique: &[] }
    }

    pub const fn with_unique(name: &'static str, unique: &'static [&'static str]) -> Self {
        Self { name, unique }
    }
}

/// A document as the store hands it back: identity, timestamp and raw fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub fields: Fields,
}

impl RawDocument {
    pub fn new(fields: Fields) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            fields,
        }
    }
}

/// Minimal document database contract. Identifiers and creation timestamps
/// are assigned by the store; every call touches a single document or a
/// single collection scan.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents of a collection, newest `created_at` first.
    async fn find_all(&self, collection: &CollectionSpec) -> Result<Vec<RawDocument>, StoreError>;

    async fn insert(
        &self,
        collection: &CollectionSpec,
        fields: Fields,
    ) -> Result<RawDocument, StoreError>;

    /// Shallow-merge `patch` into the document. `Ok(None)` when the id is unknown.
    async fn update(
        &self,
        collection: &CollectionSpec,
        id: Uuid,
        patch: Fields,
    ) -> Result<Option<RawDocument>, StoreError>;

    /// Remove and return the document. `Ok(None)` when the id is unknown.
    async fn delete(
        &self,
        collection: &CollectionSpec,
        id: Uuid,
    ) -> Result<Option<RawDocument>, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;

    fn backend_name(&self) -> &'static str;
}
