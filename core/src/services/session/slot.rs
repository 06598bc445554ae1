//! Single-slot operation session

use tracing::{debug, info, warn};

use na_shared::mask::mask_token;

use crate::domain::{OperationKind, Outcome, PendingCompletion};
use crate::errors::VerifyError;

/// Side effect requested by the session after a delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// Leave the verification page as it is
    Keep,
    /// Close the verification page
    Close,
}

/// Holds at most one pending operation
///
/// Not thread-safe on its own: every call is expected to run on the module's
/// main queue.
#[derive(Debug, Default)]
pub struct OperationSession {
    pending: Option<PendingCompletion>,
}

impl OperationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kind of the pending operation, `Idle` when the slot is empty
    pub fn kind(&self) -> OperationKind {
        self.pending
            .as_ref()
            .map(PendingCompletion::kind)
            .unwrap_or(OperationKind::Idle)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Bind a new operation to the slot
    ///
    /// An operation already pending is overwritten, last writer wins. Its
    /// completion is dropped, which wakes its caller with a closed channel.
    pub fn begin(&mut self, completion: PendingCompletion) {
        let kind = completion.kind();
        if let Some(previous) = self.pending.replace(completion) {
            warn!(
                previous = %previous.kind(),
                next = %kind,
                event = "operation_superseded",
                "Pending operation overwritten by a new request"
            );
        }
        debug!(operation = %kind, event = "operation_started", "Operation bound to session");
    }

    /// Route an outcome to the pending completion
    ///
    /// Returns whether the verification page should be closed. With nothing
    /// pending the outcome is dropped. Intermediate outcomes, and outcomes
    /// that do not match the pending kind, leave the slot untouched.
    pub fn deliver(&mut self, outcome: Outcome) -> PageAction {
        let Some(pending) = self.pending.take() else {
            debug!(
                outcome = outcome.label(),
                event = "outcome_dropped",
                "No operation pending, dropping outcome"
            );
            return PageAction::Keep;
        };

        match (pending, outcome) {
            (pending, Outcome::LoginIntermediate(kind)) => {
                debug!(
                    operation = %pending.kind(),
                    intermediate = ?kind,
                    "Intermediate outcome, operation stays pending"
                );
                self.pending = Some(pending);
                PageAction::Keep
            }
            (PendingCompletion::CheckEnvironment(tx), Outcome::EnvironmentAvailable(available)) => {
                info!(available, event = "check_env_resolved", "Environment check finished");
                let _ = tx.send(Ok(available));
                PageAction::Keep
            }
            (PendingCompletion::CheckEnvironment(tx), Outcome::ParseFailed { reason }) => {
                warn!(
                    reason = %reason,
                    event = "check_env_parse_failed",
                    "Environment check payload malformed, reporting unavailable"
                );
                let _ = tx.send(Ok(false));
                PageAction::Keep
            }
            (PendingCompletion::Login(tx), Outcome::LoginSucceeded(result)) => {
                info!(
                    token = %mask_token(&result.token),
                    operator = result.operator.as_deref().unwrap_or("unknown"),
                    event = "login_token_issued",
                    "Login token received"
                );
                let _ = tx.send(Ok(result));
                PageAction::Close
            }
            (PendingCompletion::Login(tx), Outcome::LoginCancelled) => {
                info!(event = "login_cancelled", "User cancelled login");
                let _ = tx.send(Err(VerifyError::UserCancel));
                PageAction::Close
            }
            (PendingCompletion::Login(tx), Outcome::LoginFailed { code, message }) => {
                warn!(
                    code = %code,
                    message = %message,
                    event = "login_failed",
                    "Vendor reported login failure"
                );
                let _ = tx.send(Err(VerifyError::Token { code, message }));
                PageAction::Close
            }
            (PendingCompletion::Login(tx), Outcome::ParseFailed { reason }) => {
                warn!(reason = %reason, event = "login_parse_failed", "Login payload malformed");
                let _ = tx.send(Err(VerifyError::Parse { message: reason }));
                PageAction::Close
            }
            (pending, outcome) => {
                warn!(
                    operation = %pending.kind(),
                    outcome = outcome.label(),
                    event = "outcome_mismatch",
                    "Outcome does not belong to the pending operation, ignoring"
                );
                self.pending = Some(pending);
                PageAction::Keep
            }
        }
    }

    /// Drop any pending completion without resolving it
    pub fn teardown(&mut self) {
        if let Some(pending) = self.pending.take() {
            info!(
                operation = %pending.kind(),
                event = "session_teardown",
                "Session torn down with an operation pending"
            );
        }
    }
}
