//! Shared error response structure and error codes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Rejection payload handed to the embedding application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (vendor code, raw message, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Error codes surfaced to the embedding application
pub mod error_codes {
    pub const CONTEXT_ERROR: &str = "CONTEXT_ERROR";
    pub const INIT_ERROR: &str = "INIT_ERROR";
    pub const USER_CANCEL: &str = "USER_CANCEL";
    pub const TOKEN_ERROR: &str = "TOKEN_ERROR";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const ACCELERATE_ERROR: &str = "ACCELERATE_ERROR";
    pub const ABANDONED: &str = "ABANDONED";
}

/// Trait for converting errors to ErrorResponse
pub trait IntoErrorResponse {
    fn to_error_response(&self) -> ErrorResponse;
}
