//! # NumAuth Core
//!
//! Operation session, result classification, UI configuration mapping and
//! event forwarding for one-click carrier phone-number verification. The
//! vendor SDK and the host platform are consumed through the traits in
//! [`services::verify`].

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::{VerifyError, VerifyResult};
pub use services::{
    BuilderCall, BuilderState, CallbackSink, EventForwarder, EventSubscription, InitParams,
    LoginOptions, MainQueue, OneClickVerifyService, OperationSession, PageAction,
    PlatformContext, ResultClassifier, ResultCodes, UiConfigMapper, UiDefaults, UiPlan,
    VendorFailure, VendorSdk, VendorSdkFactory, VerifyServiceConfig,
};
