//! Clause builders
//!
//! Atomic mutation operations on [`crate::model::QueryModel`], one concern
//! per file. Every operation is total: unknown entry ids and already
//! present/absent values are no-ops, so a form edit always applies cleanly.

pub mod assignments;
pub mod conditions;
pub mod joins;
pub mod ordering;
pub mod pagination;
pub mod tables;

pub use conditions::ConditionPatch;
pub use joins::JoinPatch;
pub use ordering::OrderPatch;
