//! Error taxonomy for verification operations.
//!
//! Every variant is scoped to the single in-flight operation that raised it.
//! Cosmetic configuration problems never become errors; the mapper absorbs
//! them.

use na_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Errors surfaced to the caller of a verification operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// No UI surface or platform context is available
    #[error("Context unavailable: {message}")]
    Context { message: String },

    /// The vendor SDK is not ready
    #[error("SDK not initialized: {message}")]
    Init { message: String },

    /// The user closed the verification page
    #[error("User cancelled verification")]
    UserCancel,

    /// The vendor reported a failure
    #[error("Token request failed ({code}): {message}")]
    Token { code: String, message: String },

    /// The vendor payload could not be decoded during a login
    #[error("Malformed vendor payload: {message}")]
    Parse { message: String },

    /// The pre-login acceleration call failed
    #[error("Login page acceleration failed ({code}): {message}")]
    Accelerate { code: String, message: String },

    /// The completion was dropped without being resolved
    #[error("Operation abandoned before completion")]
    Abandoned,
}

impl VerifyError {
    pub fn context(message: impl Into<String>) -> Self {
        VerifyError::Context { message: message.into() }
    }

    pub fn init(message: impl Into<String>) -> Self {
        VerifyError::Init { message: message.into() }
    }

    /// Stable code handed to the host with the rejection
    pub fn code(&self) -> &'static str {
        match self {
            VerifyError::Context { .. } => error_codes::CONTEXT_ERROR,
            VerifyError::Init { .. } => error_codes::INIT_ERROR,
            VerifyError::UserCancel => error_codes::USER_CANCEL,
            VerifyError::Token { .. } => error_codes::TOKEN_ERROR,
            VerifyError::Parse { .. } => error_codes::PARSE_ERROR,
            VerifyError::Accelerate { .. } => error_codes::ACCELERATE_ERROR,
            VerifyError::Abandoned => error_codes::ABANDONED,
        }
    }

    /// Vendor code carried by the error, if any
    pub fn vendor_code(&self) -> Option<&str> {
        match self {
            VerifyError::Token { code, .. } | VerifyError::Accelerate { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl IntoErrorResponse for VerifyError {
    fn to_error_response(&self) -> ErrorResponse {
        let response = ErrorResponse::new(self.code(), self.to_string());
        match self.vendor_code() {
            Some(code) => response.add_detail("vendorCode", code),
            None => response,
        }
    }
}

impl From<VerifyError> for ErrorResponse {
    fn from(error: VerifyError) -> Self {
        error.to_error_response()
    }
}

pub type VerifyResult<T> = Result<T, VerifyError>;

#[cfg(test)]
mod tests;
