//! One-click verification facade

use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::{debug, info, warn};
use validator::Validate;

use super::callbacks::CallbackSink;
use super::state::ModuleState;
use super::traits::{PlatformContext, VendorSdkFactory};
use super::types::{InitParams, LoginOptions, VendorFailure, VerifyServiceConfig};
use crate::domain::{OperationKind, PendingCompletion, TokenResult, UiEvent};
use crate::errors::{VerifyError, VerifyResult};
use crate::services::classifier::{ResultClassifier, ResultCodes};
use crate::services::dispatch::MainQueue;
use crate::services::events::{EventForwarder, EventSubscription};
use crate::services::ui_config::{UiConfigMapper, UiDefaults};

/// Host-facing verification module
///
/// Owns one main queue and one operation session. Independent instances do
/// not share any state.
pub struct OneClickVerifyService {
    queue: MainQueue<ModuleState>,
    factory: Arc<dyn VendorSdkFactory>,
    platform: Arc<dyn PlatformContext>,
    forwarder: Arc<EventForwarder>,
    config: VerifyServiceConfig,
}

impl OneClickVerifyService {
    /// Create the service and start its main queue
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(
        factory: Arc<dyn VendorSdkFactory>,
        platform: Arc<dyn PlatformContext>,
        config: VerifyServiceConfig,
    ) -> Self {
        let codes = ResultCodes::for_platform(config.platform);
        let forwarder = Arc::new(EventForwarder::new(codes.clone()));
        let state = ModuleState::new(
            ResultClassifier::new(codes),
            UiConfigMapper::new(UiDefaults::for_platform(config.platform)),
            Arc::clone(&forwarder),
        );

        Self {
            queue: MainQueue::spawn(state),
            factory,
            platform,
            forwarder,
            config,
        }
    }

    pub fn config(&self) -> &VerifyServiceConfig {
        &self.config
    }

    /// Construct the vendor SDK and register credentials
    ///
    /// Calling it again replaces the SDK; an operation already pending stays
    /// bound to the session.
    pub async fn init(&self, params: InitParams) -> VerifyResult<bool> {
        params
            .validate()
            .map_err(|e| VerifyError::init(format!("Invalid init parameters: {}", e)))?;

        if !self.platform.has_app_context() {
            warn!(event = "init_rejected", "No application context");
            return Err(VerifyError::init("Application context is unavailable"));
        }

        info!(channel = %params.channel, "Initializing vendor SDK");

        let sink = CallbackSink::new(self.queue.clone());
        let sdk = self
            .factory
            .create(&params, sink)
            .await
            .map_err(|e| VerifyError::init(format!("Failed to create vendor SDK: {}", e)))?;

        let log_enabled = self.config.sdk_log_enabled;
        let secret = params.scheme_secret;
        self.run(move |state| {
            sdk.set_logging_enabled(log_enabled);
            sdk.set_auth_sdk_info(&secret)
                .map_err(|e| VerifyError::init(format!("Failed to register auth info: {}", e)))?;
            state.install_sdk(sdk);
            Ok(())
        })
        .await?;

        info!(event = "sdk_initialized", "Vendor SDK ready");
        Ok(true)
    }

    /// Probe whether one-click verification is possible on this device
    ///
    /// A negative or unreadable vendor answer resolves `false`.
    pub async fn check_env_available(&self) -> VerifyResult<bool> {
        self.require_app_context()?;

        let (completion, rx) = PendingCompletion::check_environment();
        let service_type = self.config.check_env_service_type;
        self.run(move |state| state.start_check_env(completion, service_type))
            .await?;

        await_completion(rx).await
    }

    /// Display the verification page and wait for the token
    pub async fn get_login_token(&self, options: LoginOptions) -> VerifyResult<TokenResult> {
        if !self.platform.has_ui_surface() {
            warn!(event = "login_rejected", "No UI surface to host the verification page");
            return Err(VerifyError::context("No UI surface available"));
        }

        let timeout_ms = options.timeout_ms.unwrap_or(self.config.login_timeout_ms);
        let ui = options.ui;
        let (completion, rx) = PendingCompletion::login();
        self.run(move |state| state.start_login(completion, ui.as_ref(), timeout_ms))
            .await?;

        await_completion(rx).await
    }

    /// Prefetch the masked number ahead of `get_login_token`
    ///
    /// Does not touch the operation session.
    pub async fn accelerate_login_page(&self) -> VerifyResult<String> {
        self.require_app_context()?;

        let (tx, rx) = oneshot::channel::<Result<String, VendorFailure>>();
        let timeout_ms = self.config.accelerate_timeout_ms;
        self.run(move |state| {
            state.accelerate(
                timeout_ms,
                Box::new(move |result: Result<String, VendorFailure>| {
                    let _ = tx.send(result);
                }),
            )
        })
        .await?;

        match rx.await {
            Ok(Ok(result)) => {
                debug!(event = "accelerate_succeeded", "Login page accelerated");
                Ok(result)
            }
            Ok(Err(failure)) => {
                warn!(
                    code = %failure.code,
                    message = %failure.message,
                    event = "accelerate_failed",
                    "Login page acceleration failed"
                );
                Err(VerifyError::Accelerate {
                    code: failure.code,
                    message: failure.message,
                })
            }
            Err(_) => Err(VerifyError::Abandoned),
        }
    }

    /// Close the verification page
    ///
    /// Fire-and-forget: a pending login is resolved only by the vendor's own
    /// callback, never by this call.
    pub async fn quit_login_page(&self) {
        if self.queue.call(|state| state.quit_page()).await.is_err() {
            debug!("Quit requested after shutdown, ignoring");
        }
    }

    /// Register a listener for page interaction events
    pub fn add_event_listener<F>(&self, handler: F) -> EventSubscription
    where
        F: Fn(&UiEvent) + Send + Sync + 'static,
    {
        self.forwarder.add_listener(handler)
    }

    /// Kind of the operation currently pending
    pub async fn pending_operation(&self) -> OperationKind {
        self.queue
            .call(|state| state.pending_kind())
            .await
            .unwrap_or(OperationKind::Idle)
    }

    /// Drop any pending operation and release the vendor SDK
    pub async fn shutdown(&self) {
        if self.queue.call(ModuleState::teardown).await.is_err() {
            debug!("Service already shut down");
        }
    }

    fn require_app_context(&self) -> VerifyResult<()> {
        if self.platform.has_app_context() {
            Ok(())
        } else {
            Err(VerifyError::context("Application context is unavailable"))
        }
    }

    async fn run<F, R>(&self, f: F) -> VerifyResult<R>
    where
        F: FnOnce(&mut ModuleState) -> VerifyResult<R> + Send + 'static,
        R: Send + 'static,
    {
        self.queue
            .call(f)
            .await
            .map_err(|_| VerifyError::init("Verification module has shut down"))?
    }
}

impl Drop for OneClickVerifyService {
    fn drop(&mut self) {
        // The SDK holds a callback sink that keeps the queue alive
        self.queue.post(ModuleState::teardown);
    }
}

async fn await_completion<T>(rx: oneshot::Receiver<VerifyResult<T>>) -> VerifyResult<T> {
    match rx.await {
        Ok(result) => result,
        Err(_) => {
            warn!(event = "operation_abandoned", "Completion dropped before it was resolved");
            Err(VerifyError::Abandoned)
        }
    }
}
