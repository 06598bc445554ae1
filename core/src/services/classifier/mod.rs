//! Result classification
//!
//! Interprets vendor result payloads against a fixed per-platform code table
//! and reduces them to an [`Outcome`](crate::domain::Outcome).

mod classify;
mod codes;

#[cfg(test)]
mod tests;

pub use classify::ResultClassifier;
pub use codes::ResultCodes;
