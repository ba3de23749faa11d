//! WHERE and HAVING condition editing

use crate::model::{Condition, ConditionOperator, EntryId, LogicalConnector, QueryModel};

/// Partial update for one condition; unset fields are left as they are
#[derive(Debug, Clone, Default)]
pub struct ConditionPatch {
    pub column: Option<String>,
    pub operator: Option<ConditionOperator>,
    pub value: Option<String>,
    pub connector: Option<LogicalConnector>,
}

fn blank_condition(id: EntryId) -> Condition {
    Condition {
        id,
        column: String::new(),
        operator: ConditionOperator::Equals,
        value: String::new(),
        connector: LogicalConnector::And,
    }
}

fn apply_patch(list: &mut [Condition], id: EntryId, patch: ConditionPatch) {
    let Some(condition) = list.iter_mut().find(|c| c.id == id) else {
        return;
    };
    if let Some(column) = patch.column {
        condition.column = column;
    }
    if let Some(operator) = patch.operator {
        condition.operator = operator;
    }
    if let Some(value) = patch.value {
        condition.value = value;
    }
    if let Some(connector) = patch.connector {
        condition.connector = connector;
    }
    // IS NULL / IS NOT NULL never carry a value
    if !condition.operator.takes_value() {
        condition.value.clear();
    }
}

impl QueryModel {
    /// Append a blank WHERE condition and return its id
    pub fn add_condition(&mut self) -> EntryId {
        let id = self.allocate_entry_id();
        self.conditions.push(blank_condition(id));
        id
    }

    /// Patch a WHERE condition; no-op for an unknown id
    pub fn update_condition(&mut self, id: EntryId, patch: ConditionPatch) {
        apply_patch(&mut self.conditions, id, patch);
    }

    /// Remove a WHERE condition; no-op for an unknown id
    pub fn remove_condition(&mut self, id: EntryId) {
        self.conditions.retain(|c| c.id != id);
    }

    /// Append a blank HAVING condition and return its id
    pub fn add_having(&mut self) -> EntryId {
        let id = self.allocate_entry_id();
        self.having.push(blank_condition(id));
        id
    }

    /// Patch a HAVING condition; no-op for an unknown id
    pub fn update_having(&mut self, id: EntryId, patch: ConditionPatch) {
        apply_patch(&mut self.having, id, patch);
    }

    /// Remove a HAVING condition; no-op for an unknown id
    pub fn remove_having(&mut self, id: EntryId) {
        self.having.retain(|c| c.id != id);
    }
}
