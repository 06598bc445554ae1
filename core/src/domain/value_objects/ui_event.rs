//! UI interaction events forwarded to the host application

use serde::{Deserialize, Serialize};

/// Event raised by the verification page
///
/// Serialises to the host shape `{"type": "onCheckboxChange", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiEvent {
    #[serde(rename = "onUserCancel")]
    UserCancel,
    #[serde(rename = "onSwitchAccount")]
    SwitchAccount,
    #[serde(rename = "onLoginButtonClick")]
    LoginButtonClick {
        #[serde(rename = "isChecked")]
        checked: bool,
    },
    #[serde(rename = "onCheckboxChange")]
    CheckboxChange {
        #[serde(rename = "isChecked")]
        checked: bool,
    },
    #[serde(rename = "onProtocolClick")]
    ProtocolClick { name: String, url: String },
    #[serde(rename = "onUnknown")]
    Unknown {
        #[serde(rename = "rawCode")]
        raw_code: String,
    },
}

impl UiEvent {
    /// Whether the verification page must be closed after this event
    pub fn closes_page(&self) -> bool {
        matches!(self, UiEvent::UserCancel)
    }

    /// Host-facing event type name
    pub fn type_name(&self) -> &'static str {
        match self {
            UiEvent::UserCancel => "onUserCancel",
            UiEvent::SwitchAccount => "onSwitchAccount",
            UiEvent::LoginButtonClick { .. } => "onLoginButtonClick",
            UiEvent::CheckboxChange { .. } => "onCheckboxChange",
            UiEvent::ProtocolClick { .. } => "onProtocolClick",
            UiEvent::Unknown { .. } => "onUnknown",
        }
    }
}
