//! Vendor verification SDK configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Service type passed to the environment check: one-click login
pub const SERVICE_TYPE_LOGIN: i32 = 1;
/// Service type passed to the environment check: number verification
pub const SERVICE_TYPE_VERIFY: i32 = 2;

/// Host platform whose vendor SDK is being driven
///
/// The platforms ship separate vendor SDK builds with different result code
/// tables and UI defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
}

impl Default for Platform {
    fn default() -> Self {
        Platform::Android
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            _ => Err(format!("Invalid platform: {}", s)),
        }
    }
}

/// Verification SDK configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerifyConfig {
    /// Vendor application key
    #[serde(default)]
    pub app_key: String,

    /// Scheme secret registered through the auth-info call
    #[serde(default)]
    pub scheme_secret: String,

    /// Distribution channel reported to the vendor
    #[serde(default = "default_channel")]
    pub channel: String,

    /// Platform variant
    #[serde(default)]
    pub platform: Platform,

    /// Timeout handed to the vendor token request, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub login_timeout_ms: u64,

    /// Timeout handed to the vendor pre-login call, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub accelerate_timeout_ms: u64,

    /// Service type for the environment check (1 = login, 2 = verify)
    #[serde(default = "default_service_type")]
    pub check_env_service_type: i32,

    /// Whether the vendor SDK's own logging is enabled
    #[serde(default = "default_sdk_log_enabled")]
    pub sdk_log_enabled: bool,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            app_key: String::new(),
            scheme_secret: String::new(),
            channel: default_channel(),
            platform: Platform::default(),
            login_timeout_ms: default_timeout_ms(),
            accelerate_timeout_ms: default_timeout_ms(),
            check_env_service_type: default_service_type(),
            sdk_log_enabled: default_sdk_log_enabled(),
        }
    }
}

impl VerifyConfig {
    /// Create a configuration with credentials and defaults for everything else
    pub fn new(app_key: impl Into<String>, scheme_secret: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            scheme_secret: scheme_secret.into(),
            ..Default::default()
        }
    }

    /// Set the platform variant
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Load from `NUMAUTH_*` environment variables
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            app_key: env::var("NUMAUTH_APP_KEY").unwrap_or_default(),
            scheme_secret: env::var("NUMAUTH_SCHEME_SECRET").unwrap_or_default(),
            channel: env::var("NUMAUTH_CHANNEL").unwrap_or(defaults.channel),
            platform: env::var("NUMAUTH_PLATFORM")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.platform),
            login_timeout_ms: env_parse("NUMAUTH_LOGIN_TIMEOUT_MS")
                .unwrap_or(defaults.login_timeout_ms),
            accelerate_timeout_ms: env_parse("NUMAUTH_ACCELERATE_TIMEOUT_MS")
                .unwrap_or(defaults.accelerate_timeout_ms),
            check_env_service_type: env_parse("NUMAUTH_SERVICE_TYPE")
                .unwrap_or(defaults.check_env_service_type),
            sdk_log_enabled: env_parse("NUMAUTH_SDK_LOG").unwrap_or(defaults.sdk_log_enabled),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

fn default_channel() -> String {
    String::from("Umeng")
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_service_type() -> i32 {
    SERVICE_TYPE_LOGIN
}

fn default_sdk_log_enabled() -> bool {
    true
}
