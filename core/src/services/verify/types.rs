//! Parameter and configuration types for the verification service

use serde::{Deserialize, Serialize};
use validator::Validate;

use na_shared::config::{Platform, VerifyConfig};

use crate::domain::entities::ui_config::lenient;
use crate::domain::UiConfiguration;

/// Credentials handed to `init`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InitParams {
    #[validate(length(min = 1, message = "app key must not be empty"))]
    pub app_key: String,
    #[validate(length(min = 1, message = "scheme secret must not be empty"))]
    pub scheme_secret: String,
    pub channel: String,
}

impl InitParams {
    pub fn new(
        app_key: impl Into<String>,
        scheme_secret: impl Into<String>,
        channel: impl Into<String>,
    ) -> Self {
        Self {
            app_key: app_key.into(),
            scheme_secret: scheme_secret.into(),
            channel: channel.into(),
        }
    }

    /// Build init parameters from loaded configuration
    pub fn from_config(config: &VerifyConfig) -> Self {
        Self::new(&config.app_key, &config.scheme_secret, &config.channel)
    }
}

/// Options for `get_login_token`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginOptions {
    /// Page appearance; defaults apply when absent
    #[serde(deserialize_with = "lenient")]
    pub ui: Option<UiConfiguration>,
    /// Vendor timeout in milliseconds
    #[serde(rename = "timeout", deserialize_with = "lenient")]
    pub timeout_ms: Option<u64>,
}

impl LoginOptions {
    pub fn with_ui(ui: UiConfiguration) -> Self {
        Self {
            ui: Some(ui),
            timeout_ms: None,
        }
    }
}

/// Failure reported by the vendor's pre-login callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorFailure {
    pub code: String,
    pub message: String,
}

impl VendorFailure {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// One-shot listener for `accelerate_login_page`
pub type AccelerateCallback = Box<dyn FnOnce(Result<String, VendorFailure>) + Send>;

/// Runtime settings for the verification service
#[derive(Debug, Clone)]
pub struct VerifyServiceConfig {
    /// Selects the result code table and UI defaults
    pub platform: Platform,
    /// Default vendor timeout for `get_login_token`
    pub login_timeout_ms: u64,
    pub accelerate_timeout_ms: u64,
    /// Service type passed to the environment probe
    pub check_env_service_type: i32,
    pub sdk_log_enabled: bool,
}

impl Default for VerifyServiceConfig {
    fn default() -> Self {
        Self::from(&VerifyConfig::default())
    }
}

impl From<&VerifyConfig> for VerifyServiceConfig {
    fn from(config: &VerifyConfig) -> Self {
        Self {
            platform: config.platform,
            login_timeout_ms: config.login_timeout_ms,
            accelerate_timeout_ms: config.accelerate_timeout_ms,
            check_env_service_type: config.check_env_service_type,
            sdk_log_enabled: config.sdk_log_enabled,
        }
    }
}
