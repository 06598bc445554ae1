//! Domain layer containing the operation model, vendor payloads, outcomes,
//! UI configuration tree and UI events.

pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::*;
pub use value_objects::*;
