//! Entry point for vendor callbacks

use tracing::debug;

use super::state::ModuleState;
use crate::domain::{RawResult, ResultChannel};
use crate::services::dispatch::MainQueue;

/// Funnels vendor callbacks onto the main queue
///
/// Handed to the SDK factory at init. The SDK may call it from any thread;
/// the work itself always runs on the main queue, in arrival order.
#[derive(Clone)]
pub struct CallbackSink {
    queue: MainQueue<ModuleState>,
}

impl CallbackSink {
    pub(crate) fn new(queue: MainQueue<ModuleState>) -> Self {
        Self { queue }
    }

    /// Vendor success listener
    pub fn on_token_success(&self, raw: impl Into<RawResult>) {
        self.on_result(ResultChannel::Success, raw.into());
    }

    /// Vendor failure listener
    pub fn on_token_failed(&self, raw: impl Into<RawResult>) {
        self.on_result(ResultChannel::Failure, raw.into());
    }

    /// Vendor UI click listener
    pub fn on_ui_click(&self, code: impl Into<String>, raw_json: Option<String>) {
        let code = code.into();
        let posted = self
            .queue
            .post(move |state| state.handle_ui_click(&code, raw_json.as_deref()));
        if !posted {
            debug!(event = "callback_after_shutdown", "UI click arrived after shutdown");
        }
    }

    fn on_result(&self, channel: ResultChannel, raw: RawResult) {
        let posted = self
            .queue
            .post(move |state| state.handle_result(channel, &raw));
        if !posted {
            debug!(
                channel = channel.as_str(),
                event = "callback_after_shutdown",
                "Vendor result arrived after shutdown"
            );
        }
    }
}
