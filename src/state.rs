use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::models::{Resource, COLLECTIONS};
use crate::database::{DocumentStore, MemoryDocumentStore, PgDocumentStore, Repository, StoreError};

/// Shared, read-only handles every handler receives.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Pick the backend from configuration: PostgreSQL when `DATABASE_URL` is
    /// set, otherwise the in-memory store.
    pub fn from_config(config: AppConfig) -> Result<Self, StoreError> {
        let store: Arc<dyn DocumentStore> = match config.database.url {
            Some(_) => Arc::new(PgDocumentStore::connect_lazy(&config.database, &COLLECTIONS)?),
            None => {
                tracing::warn!("DATABASE_URL not set; using in-memory store (data is lost on restart)");
                Arc::new(MemoryDocumentStore::new())
            }
        };
        Ok(Self::new(config, store))
    }

    pub fn repository<T: Resource>(&self) -> Repository<T> {
        Repository::new(self.store.clone())
    }
}
