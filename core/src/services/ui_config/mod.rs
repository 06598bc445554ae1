//! UI configuration mapping
//!
//! Translates a [`UiConfiguration`](crate::domain::UiConfiguration) into an
//! ordered plan of vendor builder calls. Each plan starts by clearing custom
//! layouts and installing the UI click listener, so nothing from a previous
//! configuration survives.

mod builder;
mod defaults;
mod mapper;

#[cfg(test)]
mod tests;

pub use builder::{BuilderCall, BuilderState, UiPlan};
pub use defaults::UiDefaults;
pub use mapper::UiConfigMapper;
