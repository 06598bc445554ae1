//! Unit tests for the mock vendor SDK configuration

use std::time::Duration;

use crate::sdk::{MockScenario, MockSdkOptions, MockVerifySdkFactory};

#[test]
fn test_scenario_from_str() {
    assert_eq!("success".parse::<MockScenario>().unwrap(), MockScenario::Success);
    assert_eq!("Cancel".parse::<MockScenario>().unwrap(), MockScenario::UserCancel);
    assert_eq!("silent".parse::<MockScenario>().unwrap(), MockScenario::Silent);
    assert!(matches!(
        "failure".parse::<MockScenario>().unwrap(),
        MockScenario::Failure { ref code, .. } if code == "600011"
    ));
    assert!("timeout".parse::<MockScenario>().is_err());
}

#[test]
fn test_scenario_deserialize() {
    let scenario: MockScenario = serde_json::from_str(r#""interactive""#).unwrap();
    assert_eq!(scenario, MockScenario::Interactive);

    let scenario: MockScenario =
        serde_json::from_str(r#"{"failure":{"code":"600012","message":"预取号失败"}}"#).unwrap();
    assert_eq!(
        scenario,
        MockScenario::Failure {
            code: "600012".to_string(),
            message: "预取号失败".to_string(),
        }
    );
}

#[test]
fn test_immediate_options() {
    let options = MockSdkOptions::immediate(MockScenario::UserCancel);
    assert_eq!(options.callback_delay, Duration::ZERO);
    assert_eq!(options.scenario, MockScenario::UserCancel);
    assert!(options.env_available);
    assert!(!options.console_output);
}

#[test]
fn test_fresh_factory_record_is_empty() {
    let factory = MockVerifySdkFactory::default();
    assert_eq!(factory.created_count(), 0);
    assert_eq!(factory.record().quit_count, 0);
    assert!(factory.record().applied_plans.is_empty());
}
