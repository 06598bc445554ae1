//! Main-queue dispatch
//!
//! Every SDK invocation and every vendor callback runs on one queue that owns
//! the module state, so the session is never touched from two places at once.

mod queue;

#[cfg(test)]
mod tests;

pub use queue::{MainQueue, QueueClosed};
