//! Utility functions

pub mod color;
pub mod mask;
pub mod value;
