//! Unit tests for verification error types

use na_shared::errors::{ErrorResponse, IntoErrorResponse};

use crate::errors::VerifyError;

#[test]
fn test_error_codes_are_stable() {
    assert_eq!(VerifyError::context("no activity").code(), "CONTEXT_ERROR");
    assert_eq!(VerifyError::init("not ready").code(), "INIT_ERROR");
    assert_eq!(VerifyError::UserCancel.code(), "USER_CANCEL");
    assert_eq!(
        VerifyError::Parse { message: "eof".into() }.code(),
        "PARSE_ERROR"
    );
    assert_eq!(VerifyError::Abandoned.code(), "ABANDONED");
}

#[test]
fn test_token_error_response_carries_vendor_code() {
    let error = VerifyError::Token {
        code: "600011".to_string(),
        message: "获取token失败".to_string(),
    };
    let response: ErrorResponse = error.clone().into();
    assert_eq!(response.error, "TOKEN_ERROR");
    assert!(response.message.contains("600011"));
    assert_eq!(response.details.unwrap()["vendorCode"], "600011");
}

#[test]
fn test_accelerate_error_message() {
    let error = VerifyError::Accelerate {
        code: "600008".to_string(),
        message: "no cellular data".to_string(),
    };
    assert_eq!(error.code(), "ACCELERATE_ERROR");
    assert_eq!(error.vendor_code(), Some("600008"));
    assert!(error.to_string().contains("no cellular data"));
}

#[test]
fn test_user_cancel_has_no_details() {
    let response = VerifyError::UserCancel.to_error_response();
    assert!(response.details.is_none());
}
