//! Unit tests for result classification

use serde_json::json;

use crate::domain::{IntermediateKind, OperationKind, Outcome, RawResult};
use crate::services::classifier::{ResultClassifier, ResultCodes};

fn android() -> ResultClassifier {
    ResultClassifier::new(ResultCodes::ANDROID)
}

#[test]
fn test_check_env_success_code() {
    let raw = RawResult::from(r#"{"code":"600024","msg":"终端环境检查⽀持认证"}"#);
    assert_eq!(
        android().classify(&raw, OperationKind::CheckEnvironment),
        Outcome::EnvironmentAvailable(true)
    );
}

#[test]
fn test_check_env_other_code_is_unavailable() {
    let raw = RawResult::from(r#"{"code":"600025","msg":"终端检测参数错误"}"#);
    assert_eq!(
        android().classify(&raw, OperationKind::CheckEnvironment),
        Outcome::EnvironmentAvailable(false)
    );
}

#[test]
fn test_check_env_ignores_ui_interaction_codes() {
    let raw = RawResult::from(r#"{"code":"700003","msg":"checkbox"}"#);
    let outcome = android().classify(&raw, OperationKind::CheckEnvironment);
    assert_eq!(
        outcome,
        Outcome::LoginIntermediate(IntermediateKind::UiInteraction("700003".to_string()))
    );
    assert!(!outcome.is_terminal());

    let started = RawResult::from(r#"{"code":"600001"}"#);
    assert_eq!(
        android().classify(&started, OperationKind::CheckEnvironment),
        Outcome::LoginIntermediate(IntermediateKind::AuthPageShown)
    );

    let cancel = RawResult::from(r#"{"code":"700000"}"#);
    assert_eq!(
        android().classify(&cancel, OperationKind::CheckEnvironment),
        Outcome::EnvironmentAvailable(false)
    );
}

#[test]
fn test_check_env_code_differs_per_platform() {
    let raw = RawResult::from(json!({ "code": "600000", "msg": "" }));
    let ios = ResultClassifier::new(ResultCodes::IOS);
    assert_eq!(
        ios.classify(&raw, OperationKind::CheckEnvironment),
        Outcome::EnvironmentAvailable(true)
    );
    assert_eq!(
        android().classify(&raw, OperationKind::CheckEnvironment),
        Outcome::EnvironmentAvailable(false)
    );
}

#[test]
fn test_malformed_payload_is_parse_failure() {
    let raw = RawResult::from("{code: 600024");
    assert!(matches!(
        android().classify(&raw, OperationKind::CheckEnvironment),
        Outcome::ParseFailed { .. }
    ));
    assert!(matches!(
        android().classify(&raw, OperationKind::Login),
        Outcome::ParseFailed { .. }
    ));
}

#[test]
fn test_login_token_success() {
    let raw = RawResult::from(
        r#"{"code":"600000","msg":"获取token成功","token":"tok-abc","vendorName":"CUCC"}"#,
    );
    match android().classify(&raw, OperationKind::Login) {
        Outcome::LoginSucceeded(result) => {
            assert_eq!(result.token, "tok-abc");
            assert_eq!(result.code, "600000");
            assert_eq!(result.msg, "获取token成功");
            assert_eq!(result.operator.as_deref(), Some("CUCC"));
        }
        other => panic!("Expected LoginSucceeded, got {:?}", other),
    }
}

#[test]
fn test_login_success_code_without_token_fails_closed() {
    let raw = RawResult::from(r#"{"code":"600000","msg":"ok"}"#);
    assert!(matches!(
        android().classify(&raw, OperationKind::Login),
        Outcome::LoginFailed { code, .. } if code == "600000"
    ));
}

#[test]
fn test_login_auth_page_started_is_intermediate() {
    let raw = RawResult::from(r#"{"code":"600001","msg":"唤起授权页成功"}"#);
    assert_eq!(
        android().classify(&raw, OperationKind::Login),
        Outcome::LoginIntermediate(IntermediateKind::AuthPageShown)
    );
}

#[test]
fn test_login_user_cancel() {
    let raw = RawResult::from(r#"{"code":"700000","msg":"用户取消操作"}"#);
    assert_eq!(
        android().classify(&raw, OperationKind::Login),
        Outcome::LoginCancelled
    );
}

#[test]
fn test_ui_interaction_codes_are_not_terminal() {
    for code in ["700001", "700002", "700003", "700004"] {
        let raw = RawResult::from(json!({ "code": code }));
        let outcome = android().classify(&raw, OperationKind::Login);
        assert_eq!(
            outcome,
            Outcome::LoginIntermediate(IntermediateKind::UiInteraction(code.to_string()))
        );
        assert!(!outcome.is_terminal());
    }
}

#[test]
fn test_unknown_code_fails_closed() {
    let raw = RawResult::from(r#"{"code":"600011","msg":"获取token失败"}"#);
    assert_eq!(
        android().classify(&raw, OperationKind::Login),
        Outcome::LoginFailed {
            code: "600011".to_string(),
            message: "获取token失败".to_string(),
        }
    );

    let brand_new = RawResult::from(json!({ "code": 999999 }));
    assert!(matches!(
        android().classify(&brand_new, OperationKind::Login),
        Outcome::LoginFailed { .. }
    ));
}
