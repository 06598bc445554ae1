//! Unit tests for the UI configuration mapper

use serde_json::json;

use crate::domain::{Orientation, UiConfiguration};
use crate::services::ui_config::{BuilderCall, UiConfigMapper, UiDefaults};

fn android() -> UiConfigMapper {
    UiConfigMapper::new(UiDefaults::android())
}

fn config(value: serde_json::Value) -> UiConfiguration {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_plan_starts_with_reset_and_listener() {
    let plan = android().map(None);
    assert_eq!(
        &plan.calls()[..3],
        &[
            BuilderCall::RemoveAuthRegisterXmlConfig,
            BuilderCall::RemoveAuthRegisterViewConfig,
            BuilderCall::SetUiClickListener,
        ]
    );
}

#[test]
fn test_empty_configuration_yields_default_state() {
    let mapper = android();
    let absent = mapper.map(None);
    let empty = mapper.map(Some(&UiConfiguration::default()));
    assert_eq!(absent, empty);

    let state = absent.state();
    let setters: Vec<_> = state.setters().collect();
    assert_eq!(
        setters,
        vec![
            "removeAuthRegisterViewConfig",
            "removeAuthRegisterXmlConfig",
            "setAppPrivacyColor",
            "setPrivacyState",
            "setScreenOrientation",
            "setUIClickListener",
        ]
    );
    assert_eq!(
        state.get("setAppPrivacyColor"),
        Some(&BuilderCall::SetAppPrivacyColor {
            normal: 0xFF99_9999,
            clickable: 0xFF18_90FF,
        })
    );
    assert_eq!(
        state.get("setPrivacyState"),
        Some(&BuilderCall::SetPrivacyState(false))
    );
    assert_eq!(
        state.get("setScreenOrientation"),
        Some(&BuilderCall::SetScreenOrientation(Orientation::Portrait))
    );
}

#[test]
fn test_ios_hides_switch_button_by_default() {
    let ios = UiConfigMapper::new(UiDefaults::ios());
    let state = ios.map(None).state();
    assert_eq!(
        state.get("setSwitchAccHidden"),
        Some(&BuilderCall::SetSwitchAccHidden(true))
    );

    let shown = ios.map(Some(&config(json!({ "switchButton": { "hidden": false } }))));
    assert_eq!(
        shown.state().get("setSwitchAccHidden"),
        Some(&BuilderCall::SetSwitchAccHidden(false))
    );
}

#[test]
fn test_hidden_flags_apply_only_when_true() {
    let mapper = android();
    let shown = mapper.map(Some(&config(json!({
        "logo": { "hidden": false },
        "slogan": { "hidden": false },
        "switchButton": { "hidden": false },
        "navigationBar": { "hidden": false, "returnButtonHidden": false }
    }))));
    let state = shown.state();
    for setter in [
        "setLogoHidden",
        "setSloganHidden",
        "setSwitchAccHidden",
        "setNavHidden",
        "setNavReturnHidden",
    ] {
        assert!(!state.contains(setter), "{} should not be called", setter);
    }

    let hidden = mapper.map(Some(&config(json!({
        "logo": { "hidden": true },
        "checkbox": { "hidden": true },
        "navigationBar": { "returnButtonHidden": true }
    }))));
    let state = hidden.state();
    assert_eq!(state.get("setLogoHidden"), Some(&BuilderCall::SetLogoHidden(true)));
    assert_eq!(state.get("setCheckboxHidden"), Some(&BuilderCall::SetCheckboxHidden(true)));
    assert_eq!(state.get("setNavReturnHidden"), Some(&BuilderCall::SetNavReturnHidden(true)));
}

#[test]
fn test_colors_parse_or_fall_back_to_transparent() {
    let plan = android().map(Some(&config(json!({
        "phoneNumber": { "textColor": "#FF0000" },
        "slogan": { "textColor": "not-a-color" },
        "loginButton": { "textColor": "" },
        "privacy": { "privacyColor": { "normal": "#333333" } }
    }))));
    let state = plan.state();
    assert_eq!(state.get("setNumberColor"), Some(&BuilderCall::SetNumberColor(0xFFFF_0000)));
    assert_eq!(state.get("setSloganTextColor"), Some(&BuilderCall::SetSloganTextColor(0)));
    assert_eq!(state.get("setLogBtnTextColor"), Some(&BuilderCall::SetLogBtnTextColor(0)));
    assert_eq!(
        state.get("setAppPrivacyColor"),
        Some(&BuilderCall::SetAppPrivacyColor {
            normal: 0xFF33_3333,
            clickable: 0xFF18_90FF,
        })
    );
}

#[test]
fn test_dialog_ignored_outside_dialog_mode() {
    let plan = android().map(Some(&config(json!({
        "mode": "fullscreen-portrait",
        "dialog": { "width": 300, "height": 400, "bottom": true }
    }))));
    let state = plan.state();
    assert!(!state.contains("setDialogWidth"));
    assert!(!state.contains("setDialogHeight"));
    assert!(!state.contains("setDialogBottom"));
}

#[test]
fn test_dialog_applied_in_dialog_mode() {
    let plan = android().map(Some(&config(json!({
        "mode": "dialog-bottom",
        "dialog": { "width": 320.4, "height": 400, "tapMaskToClose": true }
    }))));
    let state = plan.state();
    assert_eq!(state.get("setDialogWidth"), Some(&BuilderCall::SetDialogWidth(320)));
    assert_eq!(state.get("setDialogHeight"), Some(&BuilderCall::SetDialogHeight(400)));
    assert_eq!(state.get("setDialogBottom"), Some(&BuilderCall::SetDialogBottom(true)));
    assert_eq!(
        state.get("setTapAuthPageMaskClosePage"),
        Some(&BuilderCall::SetTapAuthPageMaskClosePage(true))
    );

    let centered = android().map(Some(&config(json!({ "mode": "dialog-portrait" }))));
    assert!(!centered.state().contains("setDialogBottom"));
}

#[test]
fn test_animation_pairs_are_completed() {
    let enter_only = android().map(Some(&config(json!({
        "page": { "enterAnimation": "slide_up" }
    }))));
    let state = enter_only.state();
    assert_eq!(
        state.get("setAuthPageActIn"),
        Some(&BuilderCall::SetAuthPageActIn {
            auth_page_in: "slide_up".into(),
            activity_out: "out_activity".into(),
        })
    );
    assert!(!state.contains("setAuthPageActOut"));

    let exit_only = android().map(Some(&config(json!({
        "page": { "exitAnimation": "slide_down" }
    }))));
    assert_eq!(
        exit_only.state().get("setAuthPageActOut"),
        Some(&BuilderCall::SetAuthPageActOut {
            activity_in: "in_activity".into(),
            auth_page_out: "slide_down".into(),
        })
    );

    let both = android().map(Some(&config(json!({
        "page": { "enterAnimation": "fade_in", "exitAnimation": "fade_out" }
    }))));
    let state = both.state();
    assert_eq!(
        state.get("setAuthPageActIn"),
        Some(&BuilderCall::SetAuthPageActIn {
            auth_page_in: "fade_in".into(),
            activity_out: "fade_out".into(),
        })
    );
    assert_eq!(
        state.get("setAuthPageActOut"),
        Some(&BuilderCall::SetAuthPageActOut {
            activity_in: "fade_in".into(),
            auth_page_out: "fade_out".into(),
        })
    );
}

#[test]
fn test_orientation_follows_mode_unless_overridden() {
    let landscape = android().map(Some(&config(json!({ "mode": "fullscreen-landscape" }))));
    assert_eq!(
        landscape.state().get("setScreenOrientation"),
        Some(&BuilderCall::SetScreenOrientation(Orientation::Landscape))
    );

    let sensor = android().map(Some(&config(json!({
        "mode": "fullscreen-landscape",
        "page": { "orientation": "sensor-portrait" }
    }))));
    assert_eq!(
        sensor.state().get("setScreenOrientation"),
        Some(&BuilderCall::SetScreenOrientation(Orientation::SensorPortrait))
    );
}

#[test]
fn test_privacy_fields() {
    let plan = android().map(Some(&config(json!({
        "privacy": {
            "privacyOne": { "name": "《用户协议》", "url": "https://example.com/terms" },
            "privacyThree": { "name": "", "url": "https://example.com/ignored" },
            "privacyConnectTexts": ["，", "", "和"],
            "privacyOperatorIndex": 2,
            "privacyState": true,
            "vendorPrivacyPrefix": "《",
            "vendorPrivacySuffix": "》"
        }
    }))));
    let state = plan.state();
    assert_eq!(
        state.get("setAppPrivacyOne"),
        Some(&BuilderCall::SetAppPrivacyOne {
            name: "《用户协议》".into(),
            url: "https://example.com/terms".into(),
        })
    );
    assert!(!state.contains("setAppPrivacyThree"));
    assert_eq!(
        state.get("setPrivacyOperatorIndex"),
        Some(&BuilderCall::SetPrivacyOperatorIndex(2))
    );
    assert_eq!(state.get("setPrivacyState"), Some(&BuilderCall::SetPrivacyState(true)));
    assert_eq!(
        state.get("setVendorPrivacySuffix"),
        Some(&BuilderCall::SetVendorPrivacySuffix("》".into()))
    );
}

#[test]
fn test_checkbox_default_state_wins_over_privacy_state() {
    let plan = android().map(Some(&config(json!({
        "privacy": { "privacyState": false },
        "checkbox": { "defaultState": true }
    }))));
    assert_eq!(
        plan.state().get("setPrivacyState"),
        Some(&BuilderCall::SetPrivacyState(true))
    );
}

#[test]
fn test_invalid_numbers_are_skipped() {
    let plan = android().map(Some(&config(json!({
        "logo": { "width": -10, "height": 80, "offsetY": -5 },
        "privacy": { "privacyOperatorIndex": 7 }
    }))));
    let state = plan.state();
    assert!(!state.contains("setLogoWidth"));
    assert_eq!(state.get("setLogoHeight"), Some(&BuilderCall::SetLogoHeight(80)));
    assert_eq!(state.get("setLogoOffsetY"), Some(&BuilderCall::SetLogoOffsetY(-5)));
    assert!(!state.contains("setPrivacyOperatorIndex"));
}

#[test]
fn test_successive_configurations_do_not_bleed() {
    let mapper = android();
    let first = mapper.map(Some(&config(json!({
        "slogan": { "text": "为了您的账号安全，请先绑定手机号" },
        "hideLoginToast": true
    }))));
    assert!(first.state().contains("setSloganText"));
    assert!(first.state().contains("setLogBtnToastHidden"));

    let second = mapper.map(None);
    assert!(!second.state().contains("setSloganText"));
    assert!(!second.state().contains("setLogBtnToastHidden"));
}
