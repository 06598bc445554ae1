//! UI event forwarding
//!
//! Relays vendor UI-click callbacks to the host's registered listeners. Runs
//! beside the operation session and never touches its slot.

mod forwarder;

#[cfg(test)]
mod tests;

pub use forwarder::{EventForwarder, EventHandler, EventSubscription};
