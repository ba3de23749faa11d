//! ORDER BY and GROUP BY editing

use crate::model::{EntryId, OrderDirection, OrderKey, QueryModel};

/// Partial update for one sort key
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub column: Option<String>,
    pub direction: Option<OrderDirection>,
}

impl QueryModel {
    /// Append a blank ascending sort key and return its id
    pub fn add_order(&mut self) -> EntryId {
        let id = self.allocate_entry_id();
        self.order_by.push(OrderKey {
            id,
            column: String::new(),
            direction: OrderDirection::Ascending,
        });
        id
    }

    /// Patch a sort key; no-op for an unknown id
    pub fn update_order(&mut self, id: EntryId, patch: OrderPatch) {
        let Some(key) = self.order_by.iter_mut().find(|k| k.id == id) else {
            return;
        };
        if let Some(column) = patch.column {
            key.column = column;
        }
        if let Some(direction) = patch.direction {
            key.direction = direction;
        }
    }

    /// Remove a sort key; no-op for an unknown id
    pub fn remove_order(&mut self, id: EntryId) {
        self.order_by.retain(|k| k.id != id);
    }

    /// Add a GROUP BY column; no-op if already present
    pub fn add_group_by(&mut self, column: &str) {
        if !self.group_by.iter().any(|c| c == column) {
            self.group_by.push(column.to_string());
        }
    }

    /// Remove a GROUP BY column; no-op if absent
    pub fn remove_group_by(&mut self, column: &str) {
        self.group_by.retain(|c| c != column);
    }
}
