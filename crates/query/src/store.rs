//! Saved query persistence
//!
//! Stores whole query models by id. Failures never leave a half-applied
//! model behind: `save` persists the model or reports the error, `load`
//! returns a complete model or nothing.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::error::{QueryError, QueryResult};
use crate::model::QueryModel;

/// Abstract saved-query store
#[async_trait]
pub trait SavedQueryStore: Send + Sync {
    async fn save(&self, model: &QueryModel) -> QueryResult<Uuid>;
    async fn list(&self) -> QueryResult<Vec<QueryModel>>;
    async fn load(&self, id: Uuid) -> QueryResult<QueryModel>;
}

/// In-memory store, keyed by model id
#[derive(Debug, Default)]
pub struct MemoryQueryStore {
    entries: DashMap<Uuid, QueryModel>,
}

impl MemoryQueryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SavedQueryStore for MemoryQueryStore {
    async fn save(&self, model: &QueryModel) -> QueryResult<Uuid> {
        self.entries.insert(model.id, model.clone());
        Ok(model.id)
    }

    async fn list(&self) -> QueryResult<Vec<QueryModel>> {
        let mut models: Vec<QueryModel> =
            self.entries.iter().map(|entry| entry.value().clone()).collect();
        models.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(models)
    }

    async fn load(&self, id: Uuid) -> QueryResult<QueryModel> {
        self.entries
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| QueryError::Store(format!("saved query {} not found", id)))
    }
}
