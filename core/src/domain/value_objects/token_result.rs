//! Result of a successful login

use serde::{Deserialize, Serialize};

/// Token issued by the carrier, plus the vendor's code and message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResult {
    pub token: String,
    pub code: String,
    pub msg: String,
    /// Carrier that issued the token (CMCC, CUCC, CTCC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
}

impl TokenResult {
    pub fn new(token: impl Into<String>, code: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            code: code.into(),
            msg: msg.into(),
            operator: None,
        }
    }

    pub fn with_operator(mut self, operator: Option<String>) -> Self {
        self.operator = operator;
        self
    }
}
