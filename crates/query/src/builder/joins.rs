//! Join editing

use crate::model::{EntryId, Join, JoinType, QueryModel};

/// Partial update for one join
#[derive(Debug, Clone, Default)]
pub struct JoinPatch {
    pub join_type: Option<JoinType>,
    pub table: Option<String>,
    pub left_column: Option<String>,
    pub right_column: Option<String>,
}

impl QueryModel {
    /// Append a join and return its id
    ///
    /// Defaults to an INNER join against the second selected table (the
    /// first is the FROM target); the caller fills the on-columns
    /// afterwards.
    pub fn add_join(&mut self) -> EntryId {
        let id = self.allocate_entry_id();
        let table = self.tables.get(1).cloned().unwrap_or_default();
        self.joins.push(Join {
            id,
            join_type: JoinType::Inner,
            table,
            left_column: String::new(),
            right_column: String::new(),
        });
        id
    }

    /// Patch a join; no-op for an unknown id
    pub fn update_join(&mut self, id: EntryId, patch: JoinPatch) {
        let Some(join) = self.joins.iter_mut().find(|j| j.id == id) else {
            return;
        };
        if let Some(join_type) = patch.join_type {
            join.join_type = join_type;
        }
        if let Some(table) = patch.table {
            join.table = table;
        }
        if let Some(left_column) = patch.left_column {
            join.left_column = left_column;
        }
        if let Some(right_column) = patch.right_column {
            join.right_column = right_column;
        }
    }

    /// Remove a join; no-op for an unknown id
    pub fn remove_join(&mut self, id: EntryId) {
        self.joins.retain(|j| j.id != id);
    }
}
