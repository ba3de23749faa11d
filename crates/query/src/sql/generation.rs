//! Statement rendering
//!
//! Two renderings of the same model: [`QueryModel::to_sql`] inlines escaped
//! literals for the live preview pane, [`QueryModel::to_sql_with_params`]
//! emits `$n` placeholders with a separate bound-value list for execution.
//! Both return empty output when no table is selected; the caller treats
//! empty text as "nothing to execute".

use crate::executor::PreparedQuery;
use crate::model::{QueryModel, StatementKind};
use crate::security::quote_literal;

use super::conditions;

impl QueryModel {
    /// Render the model with inline literals
    pub fn to_sql(&self) -> String {
        if self.tables.is_empty() {
            return String::new();
        }
        match self.statement_kind {
            StatementKind::Select => self.select_sql(),
            StatementKind::Insert => self.insert_sql(),
            StatementKind::Update => self.update_sql(),
            StatementKind::Delete => self.delete_sql(),
        }
    }

    /// Render the model with `$n` placeholders and the values to bind
    pub fn to_sql_with_params(&self) -> (String, Vec<String>) {
        if self.tables.is_empty() {
            return (String::new(), Vec::new());
        }
        match self.statement_kind {
            StatementKind::Select => self.select_sql_with_params(),
            StatementKind::Insert => self.insert_sql_with_params(),
            StatementKind::Update => self.update_sql_with_params(),
            StatementKind::Delete => self.delete_sql_with_params(),
        }
    }

    /// Package the parameterized rendering for the execution invoker
    pub fn prepare(&self) -> PreparedQuery {
        let (sql, params) = self.to_sql_with_params();
        PreparedQuery {
            sql,
            params,
            kind: self.statement_kind,
        }
    }

    fn select_sql(&self) -> String {
        let mut lines = vec![
            format!("SELECT {}", self.select_list()),
            format!("FROM {}", self.tables[0]),
        ];
        self.push_join_lines(&mut lines);
        if let Some(clause) = conditions::render_list_inline(&self.conditions) {
            lines.push(format!("WHERE {}", clause));
        }
        self.push_group_by(&mut lines);
        if let Some(clause) = conditions::render_list_inline(&self.having) {
            lines.push(format!("HAVING {}", clause));
        }
        self.push_order_limit(&mut lines);
        lines.join("\n")
    }

    fn select_sql_with_params(&self) -> (String, Vec<String>) {
        let mut params = Vec::new();
        let mut counter = 1usize;
        let mut lines = vec![
            format!("SELECT {}", self.select_list()),
            format!("FROM {}", self.tables[0]),
        ];
        self.push_join_lines(&mut lines);
        if let Some(clause) =
            conditions::render_list_parameterized(&self.conditions, &mut params, &mut counter)
        {
            lines.push(format!("WHERE {}", clause));
        }
        self.push_group_by(&mut lines);
        if let Some(clause) =
            conditions::render_list_parameterized(&self.having, &mut params, &mut counter)
        {
            lines.push(format!("HAVING {}", clause));
        }
        self.push_order_limit(&mut lines);
        (lines.join("\n"), params)
    }

    fn insert_sql(&self) -> String {
        let head = format!("INSERT INTO {}", self.tables[0]);
        let assignments = self.renderable_assignments();
        if assignments.is_empty() {
            return head;
        }
        let columns: Vec<&str> = assignments.iter().map(|a| a.0).collect();
        let values: Vec<String> = assignments
            .iter()
            .map(|(_, value)| match value {
                Some(v) => quote_literal(v),
                None => "NULL".to_string(),
            })
            .collect();
        format!("{} ({})\nVALUES ({})", head, columns.join(", "), values.join(", "))
    }

    fn insert_sql_with_params(&self) -> (String, Vec<String>) {
        let head = format!("INSERT INTO {}", self.tables[0]);
        let assignments = self.renderable_assignments();
        if assignments.is_empty() {
            return (head, Vec::new());
        }
        let mut params = Vec::new();
        let mut counter = 1usize;
        let columns: Vec<&str> = assignments.iter().map(|a| a.0).collect();
        let values: Vec<String> = assignments
            .iter()
            .map(|(_, value)| bind_assignment(value, &mut params, &mut counter))
            .collect();
        (
            format!("{} ({})\nVALUES ({})", head, columns.join(", "), values.join(", ")),
            params,
        )
    }

    fn update_sql(&self) -> String {
        let mut lines = vec![format!("UPDATE {}", self.tables[0])];
        let assignments = self.renderable_assignments();
        if !assignments.is_empty() {
            let sets: Vec<String> = assignments
                .iter()
                .map(|(column, value)| match value {
                    Some(v) => format!("{} = {}", column, quote_literal(v)),
                    None => format!("{} = NULL", column),
                })
                .collect();
            lines.push(format!("SET {}", sets.join(", ")));
        }
        if let Some(clause) = conditions::render_list_inline(&self.conditions) {
            lines.push(format!("WHERE {}", clause));
        }
        lines.join("\n")
    }

    fn update_sql_with_params(&self) -> (String, Vec<String>) {
        let mut params = Vec::new();
        let mut counter = 1usize;
        let mut lines = vec![format!("UPDATE {}", self.tables[0])];
        let assignments = self.renderable_assignments();
        if !assignments.is_empty() {
            let sets: Vec<String> = assignments
                .iter()
                .map(|(column, value)| {
                    format!("{} = {}", column, bind_assignment(value, &mut params, &mut counter))
                })
                .collect();
            lines.push(format!("SET {}", sets.join(", ")));
        }
        if let Some(clause) =
            conditions::render_list_parameterized(&self.conditions, &mut params, &mut counter)
        {
            lines.push(format!("WHERE {}", clause));
        }
        (lines.join("\n"), params)
    }

    fn delete_sql(&self) -> String {
        let mut lines = vec![format!("DELETE FROM {}", self.tables[0])];
        if let Some(clause) = conditions::render_list_inline(&self.conditions) {
            lines.push(format!("WHERE {}", clause));
        }
        lines.join("\n")
    }

    fn delete_sql_with_params(&self) -> (String, Vec<String>) {
        let mut params = Vec::new();
        let mut counter = 1usize;
        let mut lines = vec![format!("DELETE FROM {}", self.tables[0])];
        if let Some(clause) =
            conditions::render_list_parameterized(&self.conditions, &mut params, &mut counter)
        {
            lines.push(format!("WHERE {}", clause));
        }
        (lines.join("\n"), params)
    }

    fn select_list(&self) -> String {
        if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(", ")
        }
    }

    fn push_join_lines(&self, lines: &mut Vec<String>) {
        for join in &self.joins {
            // a join is renderable once the form row is fully filled in
            if join.table.is_empty() || join.left_column.is_empty() || join.right_column.is_empty()
            {
                continue;
            }
            lines.push(format!(
                "{} {} ON {} = {}",
                join.join_type, join.table, join.left_column, join.right_column
            ));
        }
    }

    fn push_group_by(&self, lines: &mut Vec<String>) {
        if !self.group_by.is_empty() {
            lines.push(format!("GROUP BY {}", self.group_by.join(", ")));
        }
    }

    fn push_order_limit(&self, lines: &mut Vec<String>) {
        let keys: Vec<String> = self
            .order_by
            .iter()
            .filter(|k| !k.column.is_empty())
            .map(|k| format!("{} {}", k.column, k.direction))
            .collect();
        if !keys.is_empty() {
            lines.push(format!("ORDER BY {}", keys.join(", ")));
        }
        // OFFSET is only meaningful under a LIMIT
        if let Some(limit) = self.limit {
            lines.push(format!("LIMIT {}", limit));
            if let Some(offset) = self.offset {
                lines.push(format!("OFFSET {}", offset));
            }
        }
    }

    fn renderable_assignments(&self) -> Vec<(&str, &Option<String>)> {
        self.assignments
            .iter()
            .filter(|a| !a.column.is_empty())
            .map(|a| (a.column.as_str(), &a.value))
            .collect()
    }
}

fn bind_assignment(
    value: &Option<String>,
    params: &mut Vec<String>,
    counter: &mut usize,
) -> String {
    match value {
        Some(v) => {
            params.push(v.clone());
            let placeholder = format!("${}", *counter);
            *counter += 1;
            placeholder
        }
        None => "NULL".to_string(),
    }
}
