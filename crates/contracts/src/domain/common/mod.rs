//! Common types and traits for all directory entities

pub mod entity_base;
pub mod entity_id;
pub mod resource;
pub mod serde_helpers;

// Re-exports
pub use entity_base::EntityBase;
pub use entity_id::EntityId;
pub use resource::Resource;
