//! One-click login walkthrough against the mock vendor SDK
//!
//! Run with `NUMAUTH_MOCK_SCENARIO=interactive|cancel|failure|silent` to try
//! the other flows.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use na_core::domain::{
    LoginButtonConfig, PrivacyConfig, PrivacyPolicy, UiConfiguration, UiMode,
};
use na_core::services::LoginOptions;
use na_infra::{HostPlatform, MockScenario, MockSdkOptions, MockVerifySdkFactory};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = na_infra::load_config()?;
    if config.verify.app_key.is_empty() {
        config.verify.app_key = "demo-app-key".to_string();
        config.verify.scheme_secret = "demo-scheme-secret".to_string();
    }

    let scenario = std::env::var("NUMAUTH_MOCK_SCENARIO")
        .ok()
        .map(|s| s.parse::<MockScenario>())
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();

    let factory = Arc::new(MockVerifySdkFactory::new(MockSdkOptions {
        platform: config.verify.platform,
        scenario,
        callback_delay: Duration::from_millis(300),
        console_output: true,
        ..MockSdkOptions::default()
    }));

    println!("=== One-Click Login Demo ===\n");

    let service = na_infra::initialize(&config, factory.clone(), Arc::new(HostPlatform::foreground()))
        .await
        .context("failed to initialize verification service")?;

    let subscription = service.add_event_listener(|event| {
        let payload = serde_json::to_string(event).unwrap_or_default();
        println!("→ UI event: {}", payload);
    });

    let available = service.check_env_available().await?;
    println!("Environment available: {}\n", available);
    if !available {
        return Ok(());
    }

    match service.accelerate_login_page().await {
        Ok(prefetch) => println!("Accelerated: {}\n", prefetch),
        Err(e) => println!("Acceleration failed: {}\n", e),
    }

    let ui = UiConfiguration {
        mode: Some(UiMode::DialogBottom),
        login_button: Some(LoginButtonConfig {
            text: Some("本机号码一键登录".to_string()),
            background_color: Some("#1890FF".to_string()),
            ..Default::default()
        }),
        privacy: Some(PrivacyConfig {
            privacy_one: Some(PrivacyPolicy {
                name: "《用户协议》".to_string(),
                url: "https://example.com/terms".to_string(),
            }),
            ..Default::default()
        }),
        ..Default::default()
    };

    let login = tokio::time::timeout(
        Duration::from_secs(5),
        service.get_login_token(LoginOptions::with_ui(ui)),
    )
    .await;

    match login {
        Ok(Ok(result)) => println!("\n✓ Token received from {:?}", result.operator),
        Ok(Err(e)) => {
            let response = na_shared::ErrorResponse::from(e);
            println!("\n✗ Login rejected: {}", serde_json::to_string_pretty(&response)?);
        }
        Err(_) => {
            println!("\n… Vendor never answered, closing the page");
            service.quit_login_page().await;
        }
    }

    let record = factory.record();
    println!(
        "\nBuilder calls applied: {}, page closes: {}",
        record.applied_plans.first().map(|plan| plan.len()).unwrap_or(0),
        record.quit_count
    );

    subscription.remove();
    service.shutdown().await;
    Ok(())
}
