//! Common types and traits for all aggregates

pub mod aggregate_id;

// Re-exports
pub use aggregate_id::{next_sequential_id, numeric_suffix, AggregateId};
