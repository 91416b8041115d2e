use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;

use crate::database::models::{Document, Resource};
use crate::database::store::{DocumentStore, Fields, RawDocument, StoreError};

/// Typed view of one collection in the document store.
pub struct Repository<T> {
    store: Arc<dyn DocumentStore>,
    _phantom: PhantomData<T>,
}

impl<T: Resource> Repository<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _phantom: PhantomData,
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Document<T>>, StoreError> {
        self.store
            .find_all(&T::COLLECTION)
            .await?
            .into_iter()
            .map(Self::decode)
            .collect()
    }

    pub async fn create(&self, record: T) -> Result<Document<T>, StoreError> {
        let fields = match serde_json::to_value(&record)? {
            Value::Object(fields) => fields,
            other => {
                return Err(StoreError::Unavailable(format!(
                    "{} did not serialize to an object: {}",
                    T::NAME,
                    other
                )))
            }
        };

        let raw = self.store.insert(&T::COLLECTION, fields).await?;
        Self::decode(raw)
    }

    pub async fn update(&self, id: Uuid, patch: Fields) -> Result<Option<Document<T>>, StoreError> {
        self.store
            .update(&T::COLLECTION, id, patch)
            .await?
            .map(Self::decode)
            .transpose()
    }

    pub async fn delete(&self, id: Uuid) -> Result<Option<Document<T>>, StoreError> {
        self.store
            .delete(&T::COLLECTION, id)
            .await?
            .map(Self::decode)
            .transpose()
    }

    fn decode(raw: RawDocument) -> Result<Document<T>, StoreError> {
        let body = serde_json::from_value(Value::Object(raw.fields))?;
        Ok(Document {
            id: raw.id,
            body,
            created_at: raw.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryDocumentStore;
    use crate::database::models::{Newsletter, Project};
    use serde_json::json;

    fn project(title: &str) -> Project {
        Project {
            title: title.to_string(),
            description: "desc".to_string(),
            image: "https://cdn.example.com/p.png".to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_list_round_trips_typed_records() {
        let repo = Repository::<Project>::new(Arc::new(MemoryDocumentStore::new()));
        let created = repo.create(project("One")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn update_applies_only_patch_fields() {
        let repo = Repository::<Project>::new(Arc::new(MemoryDocumentStore::new()));
        let created = repo.create(project("One")).await.unwrap();

        let patch = json!({ "title": "Two" }).as_object().cloned().unwrap();
        let updated = repo.update(created.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.body.title, "Two");
        assert_eq!(updated.body.description, "desc");
    }

    #[tokio::test]
    async fn repositories_share_a_store_without_mixing_collections() {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryDocumentStore::new());
        let projects = Repository::<Project>::new(store.clone());
        let newsletter = Repository::<Newsletter>::new(store);

        projects.create(project("One")).await.unwrap();
        assert!(newsletter.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_subscription_surfaces_as_duplicate() {
        let repo = Repository::<Newsletter>::new(Arc::new(MemoryDocumentStore::new()));
        let sub = || Newsletter { email: "a@b.com".to_string() };

        repo.create(sub()).await.unwrap();
        let err = repo.create(sub()).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));
    }
}
