//! Operation session
//!
//! Owns the single pending-operation slot and routes classified outcomes to
//! the completion handle bound to it.

mod slot;

#[cfg(test)]
mod tests;

pub use slot::{OperationSession, PageAction};
