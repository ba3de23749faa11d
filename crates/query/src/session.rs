//! Editing session
//!
//! One session owns one query model for its whole lifetime; collaborators
//! (catalog, invoker, store) are injected at construction rather than
//! reached through process globals, and are shared `Arc` handles because
//! the surrounding application typically holds one of each per database.

use std::sync::Arc;

use querydesk_schema::{SchemaCatalog, TableSchema};
use uuid::Uuid;

use crate::error::QueryResult;
use crate::executor::{ExecutionInvoker, ExecutionOutcome, PreparedQuery};
use crate::model::QueryModel;
use crate::security;
use crate::store::SavedQueryStore;

pub struct QuerySession {
    model: QueryModel,
    catalog: Arc<dyn SchemaCatalog>,
    invoker: Arc<dyn ExecutionInvoker>,
    store: Arc<dyn SavedQueryStore>,
}

impl QuerySession {
    /// Start a session on a fresh, unnamed model
    pub fn new(
        catalog: Arc<dyn SchemaCatalog>,
        invoker: Arc<dyn ExecutionInvoker>,
        store: Arc<dyn SavedQueryStore>,
    ) -> Self {
        Self::with_model(QueryModel::new(""), catalog, invoker, store)
    }

    /// Start a session on an existing model
    pub fn with_model(
        model: QueryModel,
        catalog: Arc<dyn SchemaCatalog>,
        invoker: Arc<dyn ExecutionInvoker>,
        store: Arc<dyn SavedQueryStore>,
    ) -> Self {
        Self {
            model,
            catalog,
            invoker,
            store,
        }
    }

    pub fn model(&self) -> &QueryModel {
        &self.model
    }

    /// Mutable access for the clause builders; the caller re-renders the
    /// preview after every edit
    pub fn model_mut(&mut self) -> &mut QueryModel {
        &mut self.model
    }

    /// Inline-literal rendering for the preview pane
    pub fn preview(&self) -> String {
        self.model.to_sql()
    }

    /// Parameterized rendering for execution
    pub fn prepare(&self) -> PreparedQuery {
        self.model.prepare()
    }

    /// Tables the user may pick from
    pub async fn available_tables(&self) -> QueryResult<Vec<TableSchema>> {
        Ok(self.catalog.list_tables().await?)
    }

    /// Execute the current query
    ///
    /// Returns `Ok(None)` when there is nothing to execute yet (no tables
    /// selected). An engine-reported SQL error comes back inside the
    /// outcome, verbatim.
    pub async fn run(&self) -> QueryResult<Option<ExecutionOutcome>> {
        let prepared = self.prepare();
        if prepared.is_empty() {
            return Ok(None);
        }
        security::validate_single_statement(&prepared.sql)?;
        tracing::debug!(
            kind = ?prepared.kind,
            params = prepared.params.len(),
            "dispatching statement"
        );
        let outcome = self.invoker.execute(&prepared).await?;
        if let Some(error) = &outcome.error {
            tracing::warn!(%error, "execution engine reported an error");
        }
        Ok(Some(outcome))
    }

    /// Persist the current model
    pub async fn save(&self) -> QueryResult<Uuid> {
        self.store.save(&self.model).await
    }

    /// Replace the working model with a stored one
    ///
    /// The in-memory model is untouched unless the load succeeds.
    pub async fn load(&mut self, id: Uuid) -> QueryResult<()> {
        let model = self.store.load(id).await?;
        self.model = model;
        Ok(())
    }
}
