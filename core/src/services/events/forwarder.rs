//! Listener registry and UI-click decoding

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use serde::Deserialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::UiEvent;
use crate::services::classifier::ResultCodes;

/// Callback registered by the host
pub type EventHandler = Arc<dyn Fn(&UiEvent) + Send + Sync>;

type Listeners = Mutex<Vec<(Uuid, EventHandler)>>;

/// Payload attached to checkbox and login-button clicks
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CheckedPayload {
    is_checked: bool,
}

/// Payload attached to protocol link clicks
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProtocolPayload {
    name: String,
    url: String,
}

/// Decodes UI-click callbacks and emits them to every listener
pub struct EventForwarder {
    codes: ResultCodes,
    listeners: Arc<Listeners>,
}

impl EventForwarder {
    pub fn new(codes: ResultCodes) -> Self {
        Self {
            codes,
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register a listener; it stays active until the subscription is removed
    pub fn add_listener<F>(&self, handler: F) -> EventSubscription
    where
        F: Fn(&UiEvent) + Send + Sync + 'static,
    {
        let id = Uuid::new_v4();
        lock(&self.listeners).push((id, Arc::new(handler)));
        debug!(subscription = %id, "UI event listener registered");
        EventSubscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).len()
    }

    /// Decode a UI-click callback into an event
    ///
    /// Returns `None` only when a payload-bearing event arrives with a body
    /// that is not valid JSON. A missing body decodes as `{}`.
    pub fn decode(&self, code: &str, raw_json: Option<&str>) -> Option<UiEvent> {
        let codes = &self.codes;
        let event = if code == codes.user_cancel {
            UiEvent::UserCancel
        } else if code == codes.switch_account {
            UiEvent::SwitchAccount
        } else if code == codes.login_button_click {
            let payload: CheckedPayload = decode_payload(code, raw_json)?;
            UiEvent::LoginButtonClick { checked: payload.is_checked }
        } else if code == codes.checkbox_change {
            let payload: CheckedPayload = decode_payload(code, raw_json)?;
            UiEvent::CheckboxChange { checked: payload.is_checked }
        } else if code == codes.protocol_click {
            let payload: ProtocolPayload = decode_payload(code, raw_json)?;
            UiEvent::ProtocolClick { name: payload.name, url: payload.url }
        } else {
            UiEvent::Unknown { raw_code: code.to_string() }
        };
        Some(event)
    }

    /// Decode a UI-click callback and emit it to all listeners
    pub fn forward(&self, code: &str, raw_json: Option<&str>) -> Option<UiEvent> {
        let event = self.decode(code, raw_json)?;
        self.emit(&event);
        Some(event)
    }

    /// Emit an event to all listeners
    pub fn emit(&self, event: &UiEvent) {
        // Listeners run outside the lock so they may remove themselves
        let handlers: Vec<EventHandler> = lock(&self.listeners)
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();

        debug!(
            event_type = event.type_name(),
            listeners = handlers.len(),
            "Forwarding UI event"
        );
        // A panicking listener must not unwind into the main queue task
        for handler in handlers {
            if panic::catch_unwind(AssertUnwindSafe(|| handler(event))).is_err() {
                warn!(
                    event_type = event.type_name(),
                    event = "ui_listener_panicked",
                    "UI event listener panicked"
                );
            }
        }
    }
}

/// Handle returned by [`EventForwarder::add_listener`]
///
/// Dropping the handle does not unregister the listener; call
/// [`remove`](EventSubscription::remove).
#[derive(Debug, Clone)]
pub struct EventSubscription {
    id: Uuid,
    listeners: Weak<Listeners>,
}

impl EventSubscription {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Unregister the listener; returns false if it was already gone
    pub fn remove(&self) -> bool {
        let Some(listeners) = self.listeners.upgrade() else {
            return false;
        };
        let mut guard = lock(&listeners);
        let before = guard.len();
        guard.retain(|(id, _)| *id != self.id);
        let removed = guard.len() != before;
        if removed {
            debug!(subscription = %self.id, "UI event listener removed");
        }
        removed
    }
}

fn decode_payload<T>(code: &str, raw_json: Option<&str>) -> Option<T>
where
    T: for<'de> Deserialize<'de> + Default,
{
    let body = match raw_json.map(str::trim) {
        None | Some("") | Some("null") => return Some(T::default()),
        Some(body) => body,
    };
    match serde_json::from_str(body) {
        Ok(payload) => Some(payload),
        Err(e) => {
            warn!(
                code = code,
                error = %e,
                event = "ui_event_malformed",
                "Dropping UI event with malformed payload"
            );
            None
        }
    }
}

fn lock(listeners: &Listeners) -> MutexGuard<'_, Vec<(Uuid, EventHandler)>> {
    listeners.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
