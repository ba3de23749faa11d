//! Core enumerations for the query model
//!
//! Every choice the editing form offers is a closed enum here; the renderer
//! matches them exhaustively, so adding a variant without a rendering is a
//! compile error rather than a silently dropped case.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Statement kind a model renders to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
}

/// Predicate operators offered by the condition editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionOperator {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    Contains,
    StartsWith,
    EndsWith,
    IsNull,
    IsNotNull,
}

impl ConditionOperator {
    /// Whether the operator consumes the condition's value field
    pub fn takes_value(self) -> bool {
        !matches!(self, ConditionOperator::IsNull | ConditionOperator::IsNotNull)
    }
}

impl fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionOperator::Equals => write!(f, "="),
            ConditionOperator::NotEquals => write!(f, "!="),
            ConditionOperator::GreaterThan => write!(f, ">"),
            ConditionOperator::LessThan => write!(f, "<"),
            ConditionOperator::Contains => write!(f, "LIKE"),
            ConditionOperator::StartsWith => write!(f, "LIKE"),
            ConditionOperator::EndsWith => write!(f, "LIKE"),
            ConditionOperator::IsNull => write!(f, "IS NULL"),
            ConditionOperator::IsNotNull => write!(f, "IS NOT NULL"),
        }
    }
}

/// Combinator gluing a condition to the previous one in the same list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalConnector {
    And,
    Or,
}

impl fmt::Display for LogicalConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalConnector::And => write!(f, "AND"),
            LogicalConnector::Or => write!(f, "OR"),
        }
    }
}

/// Join types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinType::Inner => write!(f, "INNER JOIN"),
            JoinType::Left => write!(f, "LEFT JOIN"),
            JoinType::Right => write!(f, "RIGHT JOIN"),
            JoinType::Full => write!(f, "FULL JOIN"),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderDirection {
    Ascending,
    Descending,
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderDirection::Ascending => write!(f, "ASC"),
            OrderDirection::Descending => write!(f, "DESC"),
        }
    }
}
