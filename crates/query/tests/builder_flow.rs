//! End-to-end builder flow through the public API
//!
//! Mirrors a console editing session: pick tables from the catalog, fill in
//! the form clause by clause, watch the preview, then ship the statement to
//! a (fake) execution engine.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use querydesk_query::{
    ConditionOperator, ConditionPatch, ExecutionInvoker, ExecutionOutcome, JoinPatch,
    JoinType, LogicalConnector, MemoryQueryStore, OrderDirection, OrderPatch, PreparedQuery,
    QueryModel, QueryResult, QuerySession, SavedQueryStore, StatementKind,
};
use querydesk_schema::{ColumnSchema, StaticCatalog, TableSchema};

fn catalog() -> Arc<StaticCatalog> {
    let users = TableSchema {
        name: "users".to_string(),
        row_count: 1200,
        columns: vec![
            ColumnSchema {
                name: "id".to_string(),
                data_type: "uuid".to_string(),
                is_primary_key: true,
                is_foreign_key: false,
            },
            ColumnSchema {
                name: "email".to_string(),
                data_type: "text".to_string(),
                is_primary_key: false,
                is_foreign_key: false,
            },
        ],
    };
    let files = TableSchema {
        name: "files".to_string(),
        row_count: 9000,
        columns: vec![
            ColumnSchema {
                name: "id".to_string(),
                data_type: "uuid".to_string(),
                is_primary_key: true,
                is_foreign_key: false,
            },
            ColumnSchema {
                name: "user_id".to_string(),
                data_type: "uuid".to_string(),
                is_primary_key: false,
                is_foreign_key: true,
            },
        ],
    };
    Arc::new(StaticCatalog::new(vec![users, files]))
}

#[derive(Default)]
struct CapturingInvoker {
    last: Mutex<Option<PreparedQuery>>,
}

#[async_trait]
impl ExecutionInvoker for CapturingInvoker {
    async fn execute(&self, query: &PreparedQuery) -> QueryResult<ExecutionOutcome> {
        *self.last.lock().unwrap() = Some(query.clone());
        Ok(ExecutionOutcome {
            execution_time_ms: 2,
            ..Default::default()
        })
    }
}

#[tokio::test]
async fn full_select_editing_walkthrough() {
    let invoker = Arc::new(CapturingInvoker::default());
    let mut session = QuerySession::new(catalog(), invoker.clone(), Arc::new(MemoryQueryStore::new()));

    // the picker offers the catalog's tables
    let tables = session.available_tables().await.unwrap();
    assert_eq!(tables.len(), 2);

    let model = session.model_mut();
    model.set_name("large uploads per user");
    model.add_table("users");
    model.add_table("files");
    model.add_column("users.email");
    model.add_column("files.id");

    let join = model.add_join();
    model.update_join(
        join,
        JoinPatch {
            join_type: Some(JoinType::Left),
            left_column: Some("users.id".to_string()),
            right_column: Some("files.user_id".to_string()),
            ..Default::default()
        },
    );

    let active = model.add_condition();
    model.update_condition(
        active,
        ConditionPatch {
            column: Some("users.email".to_string()),
            operator: Some(ConditionOperator::EndsWith),
            value: Some("@example.com".to_string()),
            connector: None,
        },
    );
    let big = model.add_condition();
    model.update_condition(
        big,
        ConditionPatch {
            column: Some("files.size".to_string()),
            operator: Some(ConditionOperator::GreaterThan),
            value: Some("1048576".to_string()),
            connector: Some(LogicalConnector::And),
        },
    );

    let order = model.add_order();
    model.update_order(
        order,
        OrderPatch {
            column: Some("files.size".to_string()),
            direction: Some(OrderDirection::Descending),
        },
    );
    model.set_page(50, 2);

    assert_eq!(
        session.preview(),
        "SELECT users.email, files.id\n\
         FROM users\n\
         LEFT JOIN files ON users.id = files.user_id\n\
         WHERE users.email LIKE '%@example.com' AND files.size > '1048576'\n\
         ORDER BY files.size DESC\n\
         LIMIT 50\n\
         OFFSET 50"
    );

    let outcome = session.run().await.unwrap();
    assert!(outcome.is_some());

    let dispatched = invoker.last.lock().unwrap().clone().unwrap();
    assert_eq!(dispatched.kind, StatementKind::Select);
    assert_eq!(
        dispatched.sql,
        "SELECT users.email, files.id\n\
         FROM users\n\
         LEFT JOIN files ON users.id = files.user_id\n\
         WHERE users.email LIKE $1 AND files.size > $2\n\
         ORDER BY files.size DESC\n\
         LIMIT 50\n\
         OFFSET 50"
    );
    assert_eq!(dispatched.params, vec!["%@example.com", "1048576"]);
}

#[tokio::test]
async fn delete_flow_keeps_its_where_clause() {
    let invoker = Arc::new(CapturingInvoker::default());
    let mut session = QuerySession::new(catalog(), invoker.clone(), Arc::new(MemoryQueryStore::new()));

    let model = session.model_mut();
    model.set_statement_kind(StatementKind::Delete);
    model.add_table("files");
    let stale = model.add_condition();
    model.update_condition(
        stale,
        ConditionPatch {
            column: Some("files.user_id".to_string()),
            operator: Some(ConditionOperator::IsNull),
            ..Default::default()
        },
    );

    session.run().await.unwrap();

    let dispatched = invoker.last.lock().unwrap().clone().unwrap();
    assert_eq!(dispatched.sql, "DELETE FROM files\nWHERE files.user_id IS NULL");
    assert!(dispatched.params.is_empty());
}

#[tokio::test]
async fn saved_queries_reload_into_a_fresh_session() {
    let store = Arc::new(MemoryQueryStore::new());
    let invoker = Arc::new(CapturingInvoker::default());

    let mut editing = QuerySession::new(catalog(), invoker.clone(), store.clone());
    editing.model_mut().set_name("example.com accounts");
    editing.model_mut().add_table("users");
    let id = editing.save().await.unwrap();

    let listed = store.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "example.com accounts");

    let mut restored = QuerySession::new(catalog(), invoker, store);
    restored.load(id).await.unwrap();
    assert_eq!(restored.preview(), "SELECT *\nFROM users");
}

#[test]
fn models_are_plain_data() {
    // a model built without any session still renders
    let mut model = QueryModel::new("standalone");
    model.add_table("users");
    assert_eq!(model.to_sql(), "SELECT *\nFROM users");
}
