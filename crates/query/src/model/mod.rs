//! Query model
//!
//! The structured, serializable description of one query under construction.
//! Mutation operations live in [`crate::builder`], rendering in
//! [`crate::sql`].

pub mod query;
pub mod types;

pub use query::{Assignment, Condition, EntryId, Join, OrderKey, QueryModel};
pub use types::{ConditionOperator, JoinType, LogicalConnector, OrderDirection, StatementKind};
