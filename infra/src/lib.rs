//! # Infrastructure Layer
//!
//! Concrete collaborators for the NumAuth verification core:
//! - **Logging**: tracing subscriber installation from [`LoggingConfig`](na_shared::LoggingConfig)
//! - **Configuration**: environment-driven loading of [`AppConfig`]
//! - **Platform**: a host platform context with switchable UI surface
//! - **SDK**: a scripted mock of the vendor verification SDK for development

use std::sync::Arc;

use na_core::services::{
    InitParams, OneClickVerifyService, PlatformContext, VendorSdkFactory, VerifyServiceConfig,
};
use na_core::VerifyError;
use na_shared::config::AppConfig;

pub mod logging;
pub mod platform;
pub mod sdk;

pub use logging::init_tracing;
pub use platform::HostPlatform;
pub use sdk::{MockScenario, MockSdkOptions, MockSdkRecord, MockVerifySdk, MockVerifySdkFactory};

/// Load application configuration from the environment and `.env`
pub fn load_config() -> Result<AppConfig, InfrastructureError> {
    let config = AppConfig::from_env();
    if config.verify.login_timeout_ms == 0 {
        return Err(InfrastructureError::Config(
            "NUMAUTH_LOGIN_TIMEOUT_MS must be greater than zero".to_string(),
        ));
    }
    Ok(config)
}

/// Build the verification service and initialise it when credentials are set
///
/// Tracing is installed first so SDK initialisation is logged.
pub async fn initialize(
    config: &AppConfig,
    factory: Arc<dyn VendorSdkFactory>,
    platform: Arc<dyn PlatformContext>,
) -> Result<OneClickVerifyService, InfrastructureError> {
    init_tracing(&config.logging)?;
    tracing::info!(
        environment = %config.environment,
        platform = ?config.verify.platform,
        "Initializing verification service..."
    );

    let service =
        OneClickVerifyService::new(factory, platform, VerifyServiceConfig::from(&config.verify));

    if config.verify.app_key.is_empty() {
        tracing::warn!("NUMAUTH_APP_KEY not set, vendor SDK left uninitialized");
    } else {
        service.init(InitParams::from_config(&config.verify)).await?;
    }

    tracing::info!("Verification service initialized successfully");
    Ok(service)
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tracing subscriber could not be built
    #[error("Logging error: {0}")]
    Logging(String),

    /// Verification service error during bootstrap
    #[error("Verification error: {0}")]
    Verify(#[from] VerifyError),
}
