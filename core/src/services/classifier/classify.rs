//! Classifier implementation

use tracing::{debug, warn};

use crate::domain::{
    IntermediateKind, OperationKind, Outcome, RawResult, ResultPayload, TokenResult,
};

use super::codes::ResultCodes;

/// Reduces vendor payloads to outcomes
///
/// Matching is code equality only. Unknown codes are failures: a login never
/// succeeds and an environment is never reported available on a code the
/// table does not name.
#[derive(Debug, Clone, Default)]
pub struct ResultClassifier {
    codes: ResultCodes,
}

impl ResultClassifier {
    pub fn new(codes: ResultCodes) -> Self {
        Self { codes }
    }

    /// Classify a raw vendor payload for the operation currently pending
    pub fn classify(&self, raw: &RawResult, kind: OperationKind) -> Outcome {
        match raw.decode() {
            Ok(payload) => self.classify_payload(&payload, kind),
            Err(e) => {
                warn!(
                    operation = %kind,
                    error = %e,
                    event = "vendor_payload_malformed",
                    "Vendor result payload could not be decoded"
                );
                Outcome::ParseFailed { reason: e.to_string() }
            }
        }
    }

    /// Classify an already-decoded payload
    pub fn classify_payload(&self, payload: &ResultPayload, kind: OperationKind) -> Outcome {
        let code = payload.code.as_str();

        let outcome = match kind {
            OperationKind::CheckEnvironment => self.classify_environment(code),
            OperationKind::Login | OperationKind::Idle => self.classify_login(payload),
        };

        debug!(
            operation = %kind,
            code = code,
            outcome = outcome.label(),
            "Classified vendor result"
        );
        outcome
    }

    fn classify_environment(&self, code: &str) -> Outcome {
        if code == self.codes.env_available {
            return Outcome::EnvironmentAvailable(true);
        }
        // Page and click notifications can share the result channel
        if code == self.codes.auth_page_started {
            return Outcome::LoginIntermediate(IntermediateKind::AuthPageShown);
        }
        if self.codes.is_ui_interaction(code) {
            return Outcome::LoginIntermediate(IntermediateKind::UiInteraction(code.to_string()));
        }
        Outcome::EnvironmentAvailable(false)
    }

    fn classify_login(&self, payload: &ResultPayload) -> Outcome {
        let code = payload.code.as_str();

        if code == self.codes.token_success {
            return match payload.token() {
                Some(token) => Outcome::LoginSucceeded(
                    TokenResult::new(token, code, payload.message())
                        .with_operator(payload.operator()),
                ),
                None => Outcome::LoginFailed {
                    code: code.to_string(),
                    message: "success code without a token".to_string(),
                },
            };
        }
        if code == self.codes.auth_page_started {
            return Outcome::LoginIntermediate(IntermediateKind::AuthPageShown);
        }
        if code == self.codes.user_cancel {
            return Outcome::LoginCancelled;
        }
        if self.codes.is_ui_interaction(code) {
            return Outcome::LoginIntermediate(IntermediateKind::UiInteraction(code.to_string()));
        }

        Outcome::LoginFailed {
            code: code.to_string(),
            message: payload.message(),
        }
    }
}
