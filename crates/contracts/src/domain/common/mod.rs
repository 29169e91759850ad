//! Common types and traits for all aggregates

pub mod aggregate_root;
pub mod form;

// Re-exports
pub use aggregate_root::{AggregateRoot, EntityId};
pub use form::{non_empty, parse_amount, parse_date};
