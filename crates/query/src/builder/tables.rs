//! Table and column selection

use crate::model::QueryModel;

impl QueryModel {
    /// Add a table; no-op if already present
    pub fn add_table(&mut self, name: &str) {
        if !self.tables.iter().any(|t| t == name) {
            self.tables.push(name.to_string());
        }
    }

    /// Remove a table, cascading to columns it qualifies and joins that
    /// target it
    pub fn remove_table(&mut self, name: &str) {
        self.tables.retain(|t| t != name);
        let prefix = format!("{}.", name);
        self.columns.retain(|c| !c.starts_with(&prefix));
        self.joins.retain(|j| j.table != name);
    }

    /// Add a qualified column reference; no-op if already selected
    pub fn add_column(&mut self, column_ref: &str) {
        if !self.columns.iter().any(|c| c == column_ref) {
            self.columns.push(column_ref.to_string());
        }
    }

    /// Remove a column reference; no-op if absent
    pub fn remove_column(&mut self, column_ref: &str) {
        self.columns.retain(|c| c != column_ref);
    }
}
