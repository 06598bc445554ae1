//! Unit tests for the operation session

use tokio::sync::oneshot::error::TryRecvError;

use crate::domain::{IntermediateKind, OperationKind, Outcome, PendingCompletion, TokenResult};
use crate::errors::VerifyError;
use crate::services::session::{OperationSession, PageAction};

fn token(value: &str) -> TokenResult {
    TokenResult::new(value, "600000", "获取token成功")
}

#[test]
fn test_new_session_is_idle() {
    let session = OperationSession::new();
    assert_eq!(session.kind(), OperationKind::Idle);
    assert!(!session.is_pending());
}

#[test]
fn test_check_env_resolves_and_clears() {
    let mut session = OperationSession::new();
    let (completion, mut rx) = PendingCompletion::check_environment();
    session.begin(completion);
    assert_eq!(session.kind(), OperationKind::CheckEnvironment);

    let action = session.deliver(Outcome::EnvironmentAvailable(true));
    assert_eq!(action, PageAction::Keep);
    assert_eq!(rx.try_recv().unwrap(), Ok(true));
    assert_eq!(session.kind(), OperationKind::Idle);
}

#[test]
fn test_check_env_parse_failure_resolves_false() {
    let mut session = OperationSession::new();
    let (completion, mut rx) = PendingCompletion::check_environment();
    session.begin(completion);

    let action = session.deliver(Outcome::ParseFailed { reason: "eof".into() });
    assert_eq!(action, PageAction::Keep);
    assert_eq!(rx.try_recv().unwrap(), Ok(false));
    assert!(!session.is_pending());
}

#[test]
fn test_login_success_closes_page() {
    let mut session = OperationSession::new();
    let (completion, mut rx) = PendingCompletion::login();
    session.begin(completion);

    let action = session.deliver(Outcome::LoginSucceeded(token("tok-1")));
    assert_eq!(action, PageAction::Close);
    assert_eq!(rx.try_recv().unwrap().unwrap().token, "tok-1");
    assert!(!session.is_pending());
}

#[test]
fn test_login_cancel_rejects_with_user_cancel() {
    let mut session = OperationSession::new();
    let (completion, mut rx) = PendingCompletion::login();
    session.begin(completion);

    assert_eq!(session.deliver(Outcome::LoginCancelled), PageAction::Close);
    assert_eq!(rx.try_recv().unwrap(), Err(VerifyError::UserCancel));
}

#[test]
fn test_login_failure_rejects_with_token_error() {
    let mut session = OperationSession::new();
    let (completion, mut rx) = PendingCompletion::login();
    session.begin(completion);

    let action = session.deliver(Outcome::LoginFailed {
        code: "600011".into(),
        message: "获取token失败".into(),
    });
    assert_eq!(action, PageAction::Close);
    assert_eq!(
        rx.try_recv().unwrap(),
        Err(VerifyError::Token {
            code: "600011".into(),
            message: "获取token失败".into(),
        })
    );
}

#[test]
fn test_login_parse_failure_rejects_with_parse_error() {
    let mut session = OperationSession::new();
    let (completion, mut rx) = PendingCompletion::login();
    session.begin(completion);

    assert_eq!(
        session.deliver(Outcome::ParseFailed { reason: "bad json".into() }),
        PageAction::Close
    );
    assert!(matches!(rx.try_recv().unwrap(), Err(VerifyError::Parse { .. })));
}

#[test]
fn test_intermediate_keeps_original_completion() {
    let mut session = OperationSession::new();
    let (completion, mut rx) = PendingCompletion::login();
    session.begin(completion);

    let action = session.deliver(Outcome::LoginIntermediate(IntermediateKind::AuthPageShown));
    assert_eq!(action, PageAction::Keep);
    assert_eq!(session.kind(), OperationKind::Login);
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));

    session.deliver(Outcome::LoginSucceeded(token("second")));
    assert_eq!(rx.try_recv().unwrap().unwrap().token, "second");
}

#[test]
fn test_ui_interaction_during_check_env_keeps_slot() {
    let mut session = OperationSession::new();
    let (completion, mut rx) = PendingCompletion::check_environment();
    session.begin(completion);

    let interaction = IntermediateKind::UiInteraction("700003".into());
    session.deliver(Outcome::LoginIntermediate(interaction));
    assert_eq!(session.kind(), OperationKind::CheckEnvironment);
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));

    session.deliver(Outcome::EnvironmentAvailable(true));
    assert_eq!(rx.try_recv().unwrap(), Ok(true));
}

#[test]
fn test_deliver_without_pending_is_noop() {
    let mut session = OperationSession::new();
    assert_eq!(
        session.deliver(Outcome::LoginSucceeded(token("late"))),
        PageAction::Keep
    );
    assert_eq!(session.deliver(Outcome::LoginCancelled), PageAction::Keep);
    assert!(!session.is_pending());
}

#[test]
fn test_duplicate_terminal_outcome_resolves_once() {
    let mut session = OperationSession::new();
    let (completion, mut rx) = PendingCompletion::login();
    session.begin(completion);

    assert_eq!(session.deliver(Outcome::LoginCancelled), PageAction::Close);
    // A second terminal callback for the same operation finds the slot empty
    assert_eq!(session.deliver(Outcome::LoginCancelled), PageAction::Keep);
    assert_eq!(rx.try_recv().unwrap(), Err(VerifyError::UserCancel));
}

#[test]
fn test_begin_overwrites_previous_operation() {
    let mut session = OperationSession::new();
    let (first, mut first_rx) = PendingCompletion::login();
    let (second, mut second_rx) = PendingCompletion::check_environment();
    session.begin(first);
    session.begin(second);

    assert_eq!(session.kind(), OperationKind::CheckEnvironment);
    assert!(matches!(first_rx.try_recv(), Err(TryRecvError::Closed)));

    session.deliver(Outcome::EnvironmentAvailable(false));
    assert_eq!(second_rx.try_recv().unwrap(), Ok(false));
}

#[test]
fn test_mismatched_outcome_leaves_slot() {
    let mut session = OperationSession::new();
    let (completion, mut rx) = PendingCompletion::check_environment();
    session.begin(completion);

    assert_eq!(session.deliver(Outcome::LoginCancelled), PageAction::Keep);
    assert_eq!(session.kind(), OperationKind::CheckEnvironment);
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}

#[test]
fn test_teardown_drops_pending() {
    let mut session = OperationSession::new();
    let (completion, mut rx) = PendingCompletion::login();
    session.begin(completion);
    session.teardown();

    assert!(!session.is_pending());
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Closed)));
}
