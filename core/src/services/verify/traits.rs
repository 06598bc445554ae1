//! Collaborator traits for the vendor SDK and the host platform

use std::sync::Arc;

use async_trait::async_trait;

use super::callbacks::CallbackSink;
use super::types::{AccelerateCallback, InitParams};
use crate::services::ui_config::UiPlan;

/// Vendor verification SDK, wrapped behind its callback registration
///
/// Every method is invoked on the main queue. Results of `check_env_available`
/// and `get_login_token` arrive later through the [`CallbackSink`] handed to
/// the factory. An `Err` means the call itself was rejected synchronously.
pub trait VendorSdk: Send + Sync {
    /// Toggle the vendor's own console logging
    fn set_logging_enabled(&self, enabled: bool);

    /// Register the scheme secret issued by the vendor console
    fn set_auth_sdk_info(&self, secret: &str) -> Result<(), String>;

    /// Start the environment probe for the given service type
    fn check_env_available(&self, service_type: i32) -> Result<(), String>;

    /// Apply a builder plan to the verification page
    fn apply_ui_plan(&self, plan: &UiPlan);

    /// Display the verification page and request a token
    fn get_login_token(&self, timeout_ms: u64) -> Result<(), String>;

    /// Prefetch the masked number so the page opens faster
    fn accelerate_login_page(&self, timeout_ms: u64, callback: AccelerateCallback);

    /// Close the verification page if it is open
    fn quit_login_page(&self);
}

/// Builds the vendor SDK once init parameters are known
#[async_trait]
pub trait VendorSdkFactory: Send + Sync {
    async fn create(
        &self,
        params: &InitParams,
        callbacks: CallbackSink,
    ) -> Result<Arc<dyn VendorSdk>, String>;
}

/// Host platform state the module depends on
pub trait PlatformContext: Send + Sync {
    /// An application context exists (the module is attached to a running app)
    fn has_app_context(&self) -> bool;

    /// A foreground UI surface is available to host the verification page
    fn has_ui_surface(&self) -> bool;
}
