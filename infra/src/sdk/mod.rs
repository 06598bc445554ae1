//! Vendor SDK implementations
//!
//! The real carrier SDK is linked by the host application and adapted to
//! [`VendorSdk`](na_core::services::VendorSdk) there. This module ships a
//! scripted stand-in for development, demos and integration tests.

pub mod mock_sdk;

pub use mock_sdk::{MockScenario, MockSdkOptions, MockSdkRecord, MockVerifySdk, MockVerifySdkFactory};

#[cfg(test)]
mod tests;
