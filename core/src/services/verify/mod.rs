//! One-click verification service
//!
//! Wraps the callback-based vendor SDK behind async operations. The vendor's
//! listeners feed a [`CallbackSink`], which hands every result to the
//! classifier and session on the main queue.

mod callbacks;
mod service;
mod state;
mod traits;
mod types;


pub use callbacks::CallbackSink;
pub use service::OneClickVerifyService;
pub use state::INVOKE_FAILED;
pub use traits::{PlatformContext, VendorSdk, VendorSdkFactory};
pub use types::{AccelerateCallback, InitParams, LoginOptions, VendorFailure, VerifyServiceConfig};
