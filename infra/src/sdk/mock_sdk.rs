//! Mock Vendor SDK Implementation
//!
//! Replays vendor-shaped JSON callbacks for a chosen scenario instead of
//! talking to a carrier. Callbacks are delivered from a spawned task after a
//! configurable delay, the way the real SDK calls back from its own threads.

use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use na_core::services::{
    AccelerateCallback, CallbackSink, InitParams, ResultCodes, UiPlan, VendorFailure, VendorSdk,
    VendorSdkFactory,
};
use na_shared::config::Platform;

/// Vendor code the mock reports when the environment check fails
const ENV_UNAVAILABLE_CODE: &str = "600008";
/// Vendor code the mock reports when acceleration fails
const ACCELERATE_TIMEOUT_CODE: &str = "600015";

/// What happens after the verification page opens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MockScenario {
    /// Page opens and a token is issued
    Success,
    /// Page opens, the user ticks the privacy box and taps login, token issued
    Interactive,
    /// Page opens and the user backs out
    UserCancel,
    /// The vendor reports a failure code
    Failure { code: String, message: String },
    /// Page opens and nothing else is ever reported
    Silent,
}

impl Default for MockScenario {
    fn default() -> Self {
        MockScenario::Success
    }
}

impl FromStr for MockScenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "success" => Ok(MockScenario::Success),
            "interactive" => Ok(MockScenario::Interactive),
            "cancel" | "user_cancel" => Ok(MockScenario::UserCancel),
            "failure" => Ok(MockScenario::Failure {
                code: "600011".to_string(),
                message: "获取token失败".to_string(),
            }),
            "silent" => Ok(MockScenario::Silent),
            _ => Err(format!("Invalid mock scenario: {}", s)),
        }
    }
}

/// Behaviour of the mock SDK
#[derive(Debug, Clone)]
pub struct MockSdkOptions {
    /// Selects the code table the mock reports with
    pub platform: Platform,
    pub env_available: bool,
    pub scenario: MockScenario,
    /// Carrier reported with tokens
    pub operator: String,
    /// Masked number returned by acceleration
    pub masked_number: String,
    /// Delay before each callback
    pub callback_delay: Duration,
    pub accelerate_fails: bool,
    /// Print each callback to the console
    pub console_output: bool,
}

impl Default for MockSdkOptions {
    fn default() -> Self {
        Self {
            platform: Platform::Android,
            env_available: true,
            scenario: MockScenario::Success,
            operator: "CMCC".to_string(),
            masked_number: "138****0000".to_string(),
            callback_delay: Duration::from_millis(100),
            accelerate_fails: false,
            console_output: false,
        }
    }
}

impl MockSdkOptions {
    /// Options for tests: no delay, no console output
    pub fn immediate(scenario: MockScenario) -> Self {
        Self {
            scenario,
            callback_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// Everything the mock SDK has been asked to do
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockSdkRecord {
    pub app_key: Option<String>,
    pub logging_enabled: Option<bool>,
    pub auth_info: Option<String>,
    pub env_checks: Vec<i32>,
    pub applied_plans: Vec<UiPlan>,
    pub token_requests: Vec<u64>,
    pub accelerations: u64,
    pub quit_count: u64,
}

#[derive(Debug)]
enum MockCallback {
    Success(String),
    Failed(String),
    Click(&'static str, Option<String>),
}

/// Scripted vendor SDK
pub struct MockVerifySdk {
    options: MockSdkOptions,
    codes: ResultCodes,
    sink: CallbackSink,
    record: Arc<Mutex<MockSdkRecord>>,
    page_open: AtomicBool,
}

impl MockVerifySdk {
    fn new(
        options: MockSdkOptions,
        sink: CallbackSink,
        record: Arc<Mutex<MockSdkRecord>>,
    ) -> Self {
        Self {
            codes: ResultCodes::for_platform(options.platform),
            options,
            sink,
            record,
            page_open: AtomicBool::new(false),
        }
    }

    fn login_script(&self) -> Vec<MockCallback> {
        let codes = &self.codes;
        let page_started = json!({
            "code": codes.auth_page_started,
            "msg": "唤起授权页成功",
            "vendorName": self.options.operator,
        })
        .to_string();
        let token = json!({
            "code": codes.token_success,
            "msg": "获取token成功",
            "token": format!("mock_{}", Uuid::new_v4().simple()),
            "vendorName": self.options.operator,
        })
        .to_string();
        let checked = Some(json!({ "isChecked": true }).to_string());

        match &self.options.scenario {
            MockScenario::Success => vec![
                MockCallback::Success(page_started),
                MockCallback::Success(token),
            ],
            MockScenario::Interactive => vec![
                MockCallback::Success(page_started),
                MockCallback::Click(codes.checkbox_change, checked.clone()),
                MockCallback::Click(codes.login_button_click, checked),
                MockCallback::Success(token),
            ],
            MockScenario::UserCancel => vec![
                MockCallback::Success(page_started),
                MockCallback::Click(codes.user_cancel, None),
                MockCallback::Failed(
                    json!({ "code": codes.user_cancel, "msg": "用户取消登录" }).to_string(),
                ),
            ],
            MockScenario::Failure { code, message } => vec![MockCallback::Failed(
                json!({ "code": code, "msg": message }).to_string(),
            )],
            MockScenario::Silent => vec![MockCallback::Success(page_started)],
        }
    }

    fn schedule(&self, callbacks: Vec<MockCallback>) {
        let sink = self.sink.clone();
        let delay = self.options.callback_delay;
        let console_output = self.options.console_output;

        tokio::spawn(async move {
            for callback in callbacks {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                if console_output {
                    println!("📱 MOCK VERIFY SDK - {:?}", callback);
                }
                match callback {
                    MockCallback::Success(raw) => sink.on_token_success(raw),
                    MockCallback::Failed(raw) => sink.on_token_failed(raw),
                    MockCallback::Click(code, raw_json) => sink.on_ui_click(code, raw_json),
                }
            }
        });
    }
}

impl VendorSdk for MockVerifySdk {
    fn set_logging_enabled(&self, enabled: bool) {
        lock(&self.record).logging_enabled = Some(enabled);
    }

    fn set_auth_sdk_info(&self, secret: &str) -> Result<(), String> {
        if secret.trim().is_empty() {
            return Err("scheme secret rejected".to_string());
        }
        lock(&self.record).auth_info = Some(secret.to_string());
        Ok(())
    }

    fn check_env_available(&self, service_type: i32) -> Result<(), String> {
        lock(&self.record).env_checks.push(service_type);

        let callback = if self.options.env_available {
            MockCallback::Success(
                json!({ "code": self.codes.env_available, "msg": "终端支持认证" }).to_string(),
            )
        } else {
            MockCallback::Failed(
                json!({ "code": ENV_UNAVAILABLE_CODE, "msg": "蜂窝网络未开启" }).to_string(),
            )
        };
        self.schedule(vec![callback]);
        Ok(())
    }

    fn apply_ui_plan(&self, plan: &UiPlan) {
        lock(&self.record).applied_plans.push(plan.clone());
    }

    fn get_login_token(&self, timeout_ms: u64) -> Result<(), String> {
        lock(&self.record).token_requests.push(timeout_ms);
        if self.page_open.swap(true, Ordering::SeqCst) {
            warn!("Mock verify SDK asked to open a page that is already open");
        }

        info!(
            target: "verify_sdk",
            provider = "mock",
            scenario = ?self.options.scenario,
            timeout_ms,
            "Verification page opened (mock)"
        );
        self.schedule(self.login_script());
        Ok(())
    }

    fn accelerate_login_page(&self, _timeout_ms: u64, callback: AccelerateCallback) {
        lock(&self.record).accelerations += 1;

        let result = if self.options.accelerate_fails {
            Err(VendorFailure::new(ACCELERATE_TIMEOUT_CODE, "接口超时"))
        } else {
            Ok(json!({
                "code": self.codes.token_success,
                "msg": "预取号成功",
                "number": self.options.masked_number,
                "vendorName": self.options.operator,
            })
            .to_string())
        };

        let delay = self.options.callback_delay;
        tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            callback(result);
        });
    }

    fn quit_login_page(&self) {
        lock(&self.record).quit_count += 1;
        if self.page_open.swap(false, Ordering::SeqCst) {
            info!(target: "verify_sdk", provider = "mock", "Verification page closed (mock)");
        }
    }
}

/// Factory handing out [`MockVerifySdk`] instances that share one record
pub struct MockVerifySdkFactory {
    options: MockSdkOptions,
    record: Arc<Mutex<MockSdkRecord>>,
    created: AtomicU64,
    simulate_failure: bool,
}

impl MockVerifySdkFactory {
    pub fn new(options: MockSdkOptions) -> Self {
        Self {
            options,
            record: Arc::new(Mutex::new(MockSdkRecord::default())),
            created: AtomicU64::new(0),
            simulate_failure: false,
        }
    }

    /// A factory whose SDK construction always fails
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::new(MockSdkOptions::default())
        }
    }

    /// Snapshot of the calls made on SDKs from this factory
    pub fn record(&self) -> MockSdkRecord {
        lock(&self.record).clone()
    }

    pub fn created_count(&self) -> u64 {
        self.created.load(Ordering::SeqCst)
    }
}

impl Default for MockVerifySdkFactory {
    fn default() -> Self {
        Self::new(MockSdkOptions::default())
    }
}

#[async_trait]
impl VendorSdkFactory for MockVerifySdkFactory {
    async fn create(
        &self,
        params: &InitParams,
        callbacks: CallbackSink,
    ) -> Result<Arc<dyn VendorSdk>, String> {
        if self.simulate_failure {
            warn!("Mock verify SDK factory simulating construction failure");
            return Err("Simulated SDK construction failure".to_string());
        }

        lock(&self.record).app_key = Some(params.app_key.clone());
        self.created.fetch_add(1, Ordering::SeqCst);

        Ok(Arc::new(MockVerifySdk::new(
            self.options.clone(),
            callbacks,
            Arc::clone(&self.record),
        )))
    }
}

fn lock(record: &Mutex<MockSdkRecord>) -> MutexGuard<'_, MockSdkRecord> {
    record.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
