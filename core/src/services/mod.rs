//! Services driving a verification operation from request to resolution.

pub mod classifier;
pub mod dispatch;
pub mod events;
pub mod session;
pub mod ui_config;
pub mod verify;

// Re-export commonly used types
pub use classifier::{ResultClassifier, ResultCodes};
pub use dispatch::{MainQueue, QueueClosed};
pub use events::{EventForwarder, EventHandler, EventSubscription};
pub use session::{OperationSession, PageAction};
pub use ui_config::{BuilderCall, BuilderState, UiConfigMapper, UiDefaults, UiPlan};
pub use verify::{
    AccelerateCallback, CallbackSink, InitParams, LoginOptions, OneClickVerifyService,
    PlatformContext, VendorFailure, VendorSdk, VendorSdkFactory, VerifyServiceConfig,
    INVOKE_FAILED,
};
