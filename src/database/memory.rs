use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::store::{CollectionSpec, DocumentStore, Fields, RawDocument, StoreError};

/// Process-local document store. Used for development without PostgreSQL and
/// by the test suite.
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<&'static str, Vec<RawDocument>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn violates_unique(
        collection: &CollectionSpec,
        existing: &[RawDocument],
        fields: &Fields,
        skip: Option<Uuid>,
    ) -> Option<&'static str> {
        collection.unique.iter().copied().find(|field| {
            let Some(value) = fields.get(*field) else {
                return false;
            };
            existing
                .iter()
                .filter(|doc| Some(doc.id) != skip)
                .any(|doc| doc.fields.get(*field) == Some(value))
        })
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn find_all(&self, collection: &CollectionSpec) -> Result<Vec<RawDocument>, StoreError> {
        let collections = self.collections.read().await;
        let mut documents: Vec<RawDocument> = collections
            .get(collection.name)
            .map(|docs| docs.iter().rev().cloned().collect())
            .unwrap_or_default();
        // Stable sort keeps later inserts first when timestamps tie
        documents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(documents)
    }

    async fn insert(
        &self,
        collection: &CollectionSpec,
        fields: Fields,
    ) -> Result<RawDocument, StoreError> {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection.name).or_default();

        if let Some(field) = Self::violates_unique(collection, documents, &fields, None) {
            return Err(StoreError::Duplicate {
                collection: collection.name,
                field,
            });
        }

        let document = RawDocument::new(fields);
        documents.push(document.clone());
        Ok(document)
    }

    async fn update(
        &self,
        collection: &CollectionSpec,
        id: Uuid,
        patch: Fields,
    ) -> Result<Option<RawDocument>, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(collection.name) else {
            return Ok(None);
        };

        let Some(index) = documents.iter().position(|doc| doc.id == id) else {
            return Ok(None);
        };

        let mut merged = documents[index].fields.clone();
        merged.extend(patch);

        if let Some(field) = Self::violates_unique(collection, documents, &merged, Some(id)) {
            return Err(StoreError::Duplicate {
                collection: collection.name,
                field,
            });
        }

        documents[index].fields = merged;
        Ok(Some(documents[index].clone()))
    }

    async fn delete(
        &self,
        collection: &CollectionSpec,
        id: Uuid,
    ) -> Result<Option<RawDocument>, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(collection.name) else {
            return Ok(None);
        };

        Ok(documents
            .iter()
            .position(|doc| doc.id == id)
            .map(|index| documents.remove(index)))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
