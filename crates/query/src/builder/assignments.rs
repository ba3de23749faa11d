//! INSERT/UPDATE value assignments

use crate::model::{Assignment, QueryModel};

impl QueryModel {
    /// Set a column's value for INSERT/UPDATE, replacing any existing
    /// assignment for the same column. `None` means NULL.
    pub fn set_assignment(&mut self, column: &str, value: Option<String>) {
        if let Some(existing) = self.assignments.iter_mut().find(|a| a.column == column) {
            existing.value = value;
        } else {
            self.assignments.push(Assignment {
                column: column.to_string(),
                value,
            });
        }
    }

    /// Drop a column's assignment; no-op if absent
    pub fn remove_assignment(&mut self, column: &str) {
        self.assignments.retain(|a| a.column != column);
    }
}
