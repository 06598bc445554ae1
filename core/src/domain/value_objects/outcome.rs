//! Abstract outcome of one vendor result callback

use super::token_result::TokenResult;

/// Non-terminal progress reported through the result channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntermediateKind {
    /// The verification page was displayed
    AuthPageShown,
    /// A UI interaction code that belongs to the event channel
    UiInteraction(String),
}

/// Classified vendor result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    EnvironmentAvailable(bool),
    LoginSucceeded(TokenResult),
    LoginCancelled,
    /// Leaves the pending operation untouched
    LoginIntermediate(IntermediateKind),
    LoginFailed { code: String, message: String },
    ParseFailed { reason: String },
}

impl Outcome {
    /// Whether this outcome ends a pending operation
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::LoginIntermediate(_))
    }

    /// Stable name for logs
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::EnvironmentAvailable(_) => "environment_available",
            Outcome::LoginSucceeded(_) => "login_succeeded",
            Outcome::LoginCancelled => "login_cancelled",
            Outcome::LoginIntermediate(_) => "login_intermediate",
            Outcome::LoginFailed { .. } => "login_failed",
            Outcome::ParseFailed { .. } => "parse_failed",
        }
    }
}
