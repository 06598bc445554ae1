//! State owned by the main queue

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::traits::VendorSdk;
use super::types::AccelerateCallback;
use crate::domain::{
    OperationKind, Outcome, PendingCompletion, RawResult, ResultChannel, UiConfiguration,
};
use crate::errors::{VerifyError, VerifyResult};
use crate::services::classifier::ResultClassifier;
use crate::services::events::EventForwarder;
use crate::services::session::{OperationSession, PageAction};
use crate::services::ui_config::UiConfigMapper;

/// Vendor code reported when the SDK rejects a login call outright
pub const INVOKE_FAILED: &str = "INVOKE_FAILED";

/// Everything the main queue serialises access to
pub(crate) struct ModuleState {
    sdk: Option<Arc<dyn VendorSdk>>,
    session: OperationSession,
    classifier: ResultClassifier,
    mapper: UiConfigMapper,
    forwarder: Arc<EventForwarder>,
}

impl ModuleState {
    pub(crate) fn new(
        classifier: ResultClassifier,
        mapper: UiConfigMapper,
        forwarder: Arc<EventForwarder>,
    ) -> Self {
        Self {
            sdk: None,
            session: OperationSession::new(),
            classifier,
            mapper,
            forwarder,
        }
    }

    pub(crate) fn install_sdk(&mut self, sdk: Arc<dyn VendorSdk>) {
        if self.sdk.replace(sdk).is_some() {
            info!(event = "sdk_replaced", "Vendor SDK re-initialised");
        }
    }

    pub(crate) fn pending_kind(&self) -> OperationKind {
        self.session.kind()
    }

    fn sdk(&self) -> VerifyResult<Arc<dyn VendorSdk>> {
        self.sdk
            .clone()
            .ok_or_else(|| VerifyError::init("Vendor SDK not initialized"))
    }

    /// Bind an environment check and start the vendor probe
    ///
    /// On `Err` the completion was never bound and has been dropped.
    pub(crate) fn start_check_env(
        &mut self,
        completion: PendingCompletion,
        service_type: i32,
    ) -> VerifyResult<()> {
        let sdk = self.sdk()?;
        self.session.begin(completion);

        debug!(service_type, "Calling vendor environment check");
        if let Err(e) = sdk.check_env_available(service_type) {
            warn!(
                error = %e,
                event = "check_env_invoke_failed",
                "Vendor rejected environment check, reporting unavailable"
            );
            self.apply(Outcome::EnvironmentAvailable(false));
        }
        Ok(())
    }

    /// Configure the page, bind a login and request the token
    pub(crate) fn start_login(
        &mut self,
        completion: PendingCompletion,
        ui: Option<&UiConfiguration>,
        timeout_ms: u64,
    ) -> VerifyResult<()> {
        let sdk = self.sdk()?;

        let plan = self.mapper.map(ui);
        debug!(calls = plan.len(), "Applying UI builder plan");
        sdk.apply_ui_plan(&plan);

        self.session.begin(completion);
        if let Err(e) = sdk.get_login_token(timeout_ms) {
            warn!(error = %e, event = "login_invoke_failed", "Vendor rejected token request");
            self.apply(Outcome::LoginFailed {
                code: INVOKE_FAILED.to_string(),
                message: e,
            });
        }
        Ok(())
    }

    pub(crate) fn accelerate(
        &mut self,
        timeout_ms: u64,
        callback: AccelerateCallback,
    ) -> VerifyResult<()> {
        let sdk = self.sdk()?;
        sdk.accelerate_login_page(timeout_ms, callback);
        Ok(())
    }

    /// Classify a vendor result against the pending operation
    pub(crate) fn handle_result(&mut self, channel: ResultChannel, raw: &RawResult) {
        let kind = self.session.kind();
        debug!(channel = channel.as_str(), operation = %kind, "Vendor result received");
        let outcome = self.classifier.classify(raw, kind);
        self.apply(outcome);
    }

    /// Forward a UI click to the host listeners
    ///
    /// A cancel click closes the page unless a login is pending; in that case
    /// the vendor's terminal cancel result closes it.
    pub(crate) fn handle_ui_click(&mut self, code: &str, raw_json: Option<&str>) {
        let Some(event) = self.forwarder.forward(code, raw_json) else {
            return;
        };
        if event.closes_page() && self.session.kind() != OperationKind::Login {
            self.quit_page();
        }
    }

    pub(crate) fn quit_page(&self) {
        match &self.sdk {
            Some(sdk) => sdk.quit_login_page(),
            None => debug!("Quit requested before init, ignoring"),
        }
    }

    /// Drop any pending completion and release the SDK
    pub(crate) fn teardown(&mut self) {
        self.session.teardown();
        if self.sdk.take().is_some() {
            info!(event = "sdk_released", "Vendor SDK released");
        }
    }

    fn apply(&mut self, outcome: Outcome) {
        if self.session.deliver(outcome) == PageAction::Close {
            self.quit_page();
        }
    }
}
