//! Common types and traits for all record kinds

pub mod entity_metadata;
pub mod record;
pub mod record_id;
pub mod validation;

// Re-exports
pub use entity_metadata::EntityMetadata;
pub use record::Record;
pub use record_id::RecordId;
pub use validation::ValidationError;
