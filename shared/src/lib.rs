//! Shared utilities and common types for the NumAuth bridge
//!
//! This crate provides common functionality used across all workspace members:
//! - Configuration types (SDK credentials, timeouts, logging)
//! - Error response structure and stable error codes
//! - Value parsers for UI configuration primitives (colors, sizes)
//! - Log masking helpers

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, LogFormat, LoggingConfig, Platform, VerifyConfig};
pub use errors::{error_codes, ErrorResponse, IntoErrorResponse};
pub use utils::{color, mask, value};
