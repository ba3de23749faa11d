//! The query model struct
//!
//! One mutable, session-owned description of a query. Every list the form
//! edits row-by-row (conditions, joins, order keys) carries a model-scoped
//! entry id so edits can address a row after reordering or deletion; the id
//! counter is serialized with the model so ids survive a save/load round
//! trip.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{ConditionOperator, JoinType, LogicalConnector, OrderDirection, StatementKind};

/// Identity of one editable entry (condition, join, order key)
pub type EntryId = u64;

/// One WHERE/HAVING predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: EntryId,
    /// Qualified column reference; the renderer skips conditions with an
    /// empty column
    pub column: String,
    pub operator: ConditionOperator,
    /// Free-form value; ignored when the operator takes no value
    pub value: String,
    /// Glues this condition to the previous one; never rendered for the
    /// first rendered condition in a list
    pub connector: LogicalConnector,
}

/// One table join with its equality predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Join {
    pub id: EntryId,
    pub join_type: JoinType,
    pub table: String,
    pub left_column: String,
    pub right_column: String,
}

/// One sort key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderKey {
    pub id: EntryId,
    pub column: String,
    pub direction: OrderDirection,
}

/// One column/value pair feeding INSERT and UPDATE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub column: String,
    /// `None` renders as NULL
    pub value: Option<String>,
}

/// One query under construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryModel {
    pub id: Uuid,
    pub name: String,
    pub statement_kind: StatementKind,
    /// Ordered, duplicate-free; the first table is the FROM target and the
    /// second is the default join target
    pub tables: Vec<String>,
    /// Ordered, duplicate-free qualified column refs; empty means `*`
    pub columns: Vec<String>,
    pub conditions: Vec<Condition>,
    pub joins: Vec<Join>,
    pub group_by: Vec<String>,
    pub having: Vec<Condition>,
    pub order_by: Vec<OrderKey>,
    pub assignments: Vec<Assignment>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    next_entry_id: EntryId,
}

impl QueryModel {
    /// Create an empty model with a fresh id
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            statement_kind: StatementKind::Select,
            tables: Vec::new(),
            columns: Vec::new(),
            conditions: Vec::new(),
            joins: Vec::new(),
            group_by: Vec::new(),
            having: Vec::new(),
            order_by: Vec::new(),
            assignments: Vec::new(),
            limit: None,
            offset: None,
            next_entry_id: 1,
        }
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_statement_kind(&mut self, kind: StatementKind) {
        self.statement_kind = kind;
    }

    pub(crate) fn allocate_entry_id(&mut self) -> EntryId {
        let id = self.next_entry_id;
        self.next_entry_id += 1;
        id
    }
}

impl Default for QueryModel {
    fn default() -> Self {
        Self::new("")
    }
}
