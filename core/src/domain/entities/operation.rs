//! Operation kinds and the completion handle bound to a pending operation

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use crate::domain::value_objects::TokenResult;
use crate::errors::VerifyResult;

/// Kind of the operation currently occupying the session slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// No operation pending
    Idle,
    /// Capability probe for one-click verification
    CheckEnvironment,
    /// Full verification flow culminating in a token
    Login,
}

impl OperationKind {
    /// Stable name for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Idle => "idle",
            OperationKind::CheckEnvironment => "check_env",
            OperationKind::Login => "login",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completion handle for a caller awaiting an operation
///
/// Each variant carries the sending half of a oneshot channel, so the kind of
/// a pending operation is always paired with its handle. Resolving consumes
/// the handle, which makes a second resolution impossible. Dropping it
/// unresolved wakes the caller with a closed channel.
#[derive(Debug)]
pub enum PendingCompletion {
    CheckEnvironment(oneshot::Sender<VerifyResult<bool>>),
    Login(oneshot::Sender<VerifyResult<TokenResult>>),
}

impl PendingCompletion {
    /// Create a completion for an environment check and its receiving half
    pub fn check_environment() -> (Self, oneshot::Receiver<VerifyResult<bool>>) {
        let (tx, rx) = oneshot::channel();
        (PendingCompletion::CheckEnvironment(tx), rx)
    }

    /// Create a completion for a login and its receiving half
    pub fn login() -> (Self, oneshot::Receiver<VerifyResult<TokenResult>>) {
        let (tx, rx) = oneshot::channel();
        (PendingCompletion::Login(tx), rx)
    }

    /// Operation kind this completion belongs to
    pub fn kind(&self) -> OperationKind {
        match self {
            PendingCompletion::CheckEnvironment(_) => OperationKind::CheckEnvironment,
            PendingCompletion::Login(_) => OperationKind::Login,
        }
    }
}
