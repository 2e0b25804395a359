//! Common types for all aggregates

pub mod aggregate_id;
pub mod field_value;

// Re-exports
pub use aggregate_id::EntityId;
pub use field_value::FieldValue;
