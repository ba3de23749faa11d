//! Condition fragment rendering
//!
//! One explicit arm per operator; there is deliberately no default arm, so
//! a new operator variant fails to compile until it gets a rendering.

use crate::model::{Condition, ConditionOperator};
use crate::security::quote_literal;

/// Render one condition with its value inlined as an escaped literal
fn render_inline(condition: &Condition) -> String {
    let column = condition.column.as_str();
    match condition.operator {
        ConditionOperator::Equals
        | ConditionOperator::NotEquals
        | ConditionOperator::GreaterThan
        | ConditionOperator::LessThan => format!(
            "{} {} {}",
            column,
            condition.operator,
            quote_literal(&condition.value)
        ),
        ConditionOperator::Contains => {
            format!("{} LIKE {}", column, quote_literal(&format!("%{}%", condition.value)))
        }
        ConditionOperator::StartsWith => {
            format!("{} LIKE {}", column, quote_literal(&format!("{}%", condition.value)))
        }
        ConditionOperator::EndsWith => {
            format!("{} LIKE {}", column, quote_literal(&format!("%{}", condition.value)))
        }
        ConditionOperator::IsNull => format!("{} IS NULL", column),
        ConditionOperator::IsNotNull => format!("{} IS NOT NULL", column),
    }
}

/// Render one condition against the bound-parameter list
fn render_parameterized(
    condition: &Condition,
    params: &mut Vec<String>,
    counter: &mut usize,
) -> String {
    let column = condition.column.as_str();
    match condition.operator {
        ConditionOperator::Equals
        | ConditionOperator::NotEquals
        | ConditionOperator::GreaterThan
        | ConditionOperator::LessThan => {
            params.push(condition.value.clone());
            let fragment = format!("{} {} ${}", column, condition.operator, *counter);
            *counter += 1;
            fragment
        }
        ConditionOperator::Contains => {
            like_fragment(column, format!("%{}%", condition.value), params, counter)
        }
        ConditionOperator::StartsWith => {
            like_fragment(column, format!("{}%", condition.value), params, counter)
        }
        ConditionOperator::EndsWith => {
            like_fragment(column, format!("%{}", condition.value), params, counter)
        }
        ConditionOperator::IsNull => format!("{} IS NULL", column),
        ConditionOperator::IsNotNull => format!("{} IS NOT NULL", column),
    }
}

fn like_fragment(
    column: &str,
    pattern: String,
    params: &mut Vec<String>,
    counter: &mut usize,
) -> String {
    params.push(pattern);
    let fragment = format!("{} LIKE ${}", column, *counter);
    *counter += 1;
    fragment
}

/// Render a WHERE/HAVING list with inline literals
///
/// Conditions with an empty column are skipped. The connector of the first
/// rendered condition is dropped; later connectors glue each fragment to
/// the previous one. Returns `None` when nothing renders.
pub(crate) fn render_list_inline(conditions: &[Condition]) -> Option<String> {
    let mut out = String::new();
    let mut rendered = 0usize;
    for condition in conditions {
        if condition.column.is_empty() {
            continue;
        }
        if rendered > 0 {
            out.push(' ');
            out.push_str(&condition.connector.to_string());
            out.push(' ');
        }
        out.push_str(&render_inline(condition));
        rendered += 1;
    }
    (rendered > 0).then_some(out)
}

/// Render a WHERE/HAVING list with `$n` placeholders, appending bound
/// values to `params`
pub(crate) fn render_list_parameterized(
    conditions: &[Condition],
    params: &mut Vec<String>,
    counter: &mut usize,
) -> Option<String> {
    let mut out = String::new();
    let mut rendered = 0usize;
    for condition in conditions {
        if condition.column.is_empty() {
            continue;
        }
        if rendered > 0 {
            out.push(' ');
            out.push_str(&condition.connector.to_string());
            out.push(' ');
        }
        out.push_str(&render_parameterized(condition, params, counter));
        rendered += 1;
    }
    (rendered > 0).then_some(out)
}
