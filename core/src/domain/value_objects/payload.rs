//! Vendor result payloads
//!
//! The Android SDK hands results over as JSON strings, the iOS SDK as
//! dictionaries. Both decode into [`ResultPayload`]. Codes may arrive as
//! strings or numbers and are compared as strings.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Listener method through which a result arrived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultChannel {
    Success,
    Failure,
}

impl ResultChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultChannel::Success => "success",
            ResultChannel::Failure => "failure",
        }
    }
}

/// Raw vendor callback body, before decoding
#[derive(Debug, Clone, PartialEq)]
pub enum RawResult {
    /// JSON text
    Text(String),
    /// Already-structured dictionary
    Structured(Value),
}

impl RawResult {
    /// Attempt a structured decode of the payload
    pub fn decode(&self) -> Result<ResultPayload, serde_json::Error> {
        match self {
            RawResult::Text(text) => serde_json::from_str(text),
            RawResult::Structured(value) => ResultPayload::deserialize(value),
        }
    }
}

impl From<String> for RawResult {
    fn from(text: String) -> Self {
        RawResult::Text(text)
    }
}

impl From<&str> for RawResult {
    fn from(text: &str) -> Self {
        RawResult::Text(text.to_string())
    }
}

impl From<Value> for RawResult {
    fn from(value: Value) -> Self {
        RawResult::Structured(value)
    }
}

/// Decoded vendor result
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResultPayload {
    #[serde(deserialize_with = "code_as_string")]
    pub code: String,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, rename = "vendorName")]
    pub vendor_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResultPayload {
    /// Human-readable message, from `msg` or a `message` extra field
    pub fn message(&self) -> String {
        self.msg
            .clone()
            .or_else(|| self.extra_str("message"))
            .unwrap_or_default()
    }

    /// Carrier that issued the token, when the vendor reports it
    pub fn operator(&self) -> Option<String> {
        self.vendor_name
            .clone()
            .or_else(|| self.extra_str("operator"))
            .or_else(|| self.extra_str("carrierName"))
    }

    /// Token, ignoring empty strings
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    fn extra_str(&self, key: &str) -> Option<String> {
        self.extra.get(key).and_then(Value::as_str).map(str::to_string)
    }
}

fn code_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Number(i64),
    }

    Ok(match Code::deserialize(deserializer)? {
        Code::Text(text) => text.trim().to_string(),
        Code::Number(number) => number.to_string(),
    })
}
