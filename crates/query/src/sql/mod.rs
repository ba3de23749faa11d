//! SQL rendering
//!
//! Pure, deterministic text generation from a query model. Clause order is
//! fixed (SELECT, FROM, JOIN, WHERE, GROUP BY, HAVING, ORDER BY,
//! LIMIT/OFFSET) regardless of the order edits were applied in.

pub mod conditions;
pub mod generation;
