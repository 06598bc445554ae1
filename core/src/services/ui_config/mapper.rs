//! Configuration-to-builder mapper

use tracing::{debug, warn};

use na_shared::color::{parse_color, try_parse_hex_color, TRANSPARENT};
use na_shared::value::{dimension, index_within, is_set, offset};

use crate::domain::{
    CheckboxConfig, DialogConfig, LoginButtonConfig, LogoConfig, NavigationBarConfig,
    PageConfig, PhoneNumberConfig, PrivacyConfig, SloganConfig, StatusBarConfig,
    SwitchButtonConfig, UiConfiguration, UiMode,
};

use super::builder::{BuilderCall, UiPlan};
use super::defaults::UiDefaults;

/// Maps UI configurations to builder plans
///
/// Pure: the same configuration always yields the same plan, and a plan never
/// depends on a configuration mapped earlier.
#[derive(Debug, Clone, Default)]
pub struct UiConfigMapper {
    defaults: UiDefaults,
}

impl UiConfigMapper {
    pub fn new(defaults: UiDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &UiDefaults {
        &self.defaults
    }

    /// Build the plan for a configuration, or for the defaults when absent
    pub fn map(&self, config: Option<&UiConfiguration>) -> UiPlan {
        let empty = UiConfiguration::default();
        let config = config.unwrap_or(&empty);
        let mode = config.mode();

        let mut plan = UiPlan::default();
        plan.push(BuilderCall::RemoveAuthRegisterXmlConfig);
        plan.push(BuilderCall::RemoveAuthRegisterViewConfig);
        plan.push(BuilderCall::SetUiClickListener);

        self.map_privacy(&mut plan, config.privacy.as_ref(), config.checkbox.as_ref());
        if let Some(logo) = &config.logo {
            map_logo(&mut plan, logo);
        }
        if let Some(number) = &config.phone_number {
            map_phone_number(&mut plan, number);
        }
        if let Some(slogan) = &config.slogan {
            map_slogan(&mut plan, slogan);
        }
        if let Some(button) = &config.login_button {
            map_login_button(&mut plan, button);
        }
        self.map_switch_button(&mut plan, config.switch_button.as_ref());
        if let Some(checkbox) = &config.checkbox {
            map_checkbox(&mut plan, checkbox);
        }
        if let Some(nav) = &config.navigation_bar {
            map_navigation_bar(&mut plan, nav);
        }
        if let Some(status) = &config.status_bar {
            map_status_bar(&mut plan, status);
        }
        if mode.is_dialog() {
            map_dialog(&mut plan, mode, config.dialog.as_ref());
        } else if config.dialog.is_some() {
            debug!(mode = ?mode, "Ignoring dialog configuration outside dialog mode");
        }
        self.map_page(&mut plan, mode, config.page.as_ref());
        if is_set(config.hide_login_toast) {
            plan.push(BuilderCall::SetLogBtnToastHidden(true));
        }

        debug!(calls = plan.len(), mode = ?mode, "Mapped UI configuration");
        plan
    }

    fn map_privacy(
        &self,
        plan: &mut UiPlan,
        privacy: Option<&PrivacyConfig>,
        checkbox: Option<&CheckboxConfig>,
    ) {
        let empty = PrivacyConfig::default();
        let privacy = privacy.unwrap_or(&empty);

        let policies = [&privacy.privacy_one, &privacy.privacy_two, &privacy.privacy_three];
        for (slot, policy) in policies.into_iter().enumerate() {
            let Some(policy) = policy.as_ref().filter(|p| !p.name.is_empty()) else {
                continue;
            };
            let (name, url) = (policy.name.clone(), policy.url.clone());
            plan.push(match slot {
                0 => BuilderCall::SetAppPrivacyOne { name, url },
                1 => BuilderCall::SetAppPrivacyTwo { name, url },
                _ => BuilderCall::SetAppPrivacyThree { name, url },
            });
        }

        // The builder takes both colors in one call, so each side needs a value
        let colors = privacy.privacy_color.as_ref();
        let normal = colors
            .and_then(|c| c.normal.as_deref())
            .map(|c| parse_color(Some(c)))
            .unwrap_or(self.defaults.privacy_normal_color);
        let clickable = colors
            .and_then(|c| c.clickable.as_deref())
            .map(|c| parse_color(Some(c)))
            .unwrap_or(self.defaults.privacy_clickable_color);
        plan.push(BuilderCall::SetAppPrivacyColor { normal, clickable });

        if let Some(texts) = &privacy.privacy_connect_texts {
            plan.push(BuilderCall::SetPrivacyConectTexts(texts.clone()));
        }
        if let Some(index) = privacy.privacy_operator_index {
            match index_within(index, 3) {
                Some(index) => plan.push(BuilderCall::SetPrivacyOperatorIndex(index)),
                None => warn!(index, "Privacy operator index out of range, ignoring"),
            }
        }

        let checked = checkbox
            .and_then(|c| c.default_state)
            .or(privacy.privacy_state)
            .unwrap_or(self.defaults.privacy_checked);
        plan.push(BuilderCall::SetPrivacyState(checked));

        if let Some(prefix) = &privacy.vendor_privacy_prefix {
            plan.push(BuilderCall::SetVendorPrivacyPrefix(prefix.clone()));
        }
        if let Some(suffix) = &privacy.vendor_privacy_suffix {
            plan.push(BuilderCall::SetVendorPrivacySuffix(suffix.clone()));
        }
    }

    fn map_switch_button(&self, plan: &mut UiPlan, switch: Option<&SwitchButtonConfig>) {
        if let Some(switch) = switch {
            if let Some(text) = &switch.text {
                plan.push(BuilderCall::SetSwitchAccText(text.clone()));
            }
            push_dimension(plan, switch.text_size, BuilderCall::SetSwitchAccTextSize);
            push_color(plan, switch.text_color.as_deref(), BuilderCall::SetSwitchAccTextColor);
            push_offset(plan, switch.offset_y, BuilderCall::SetSwitchOffsetY);
        }

        let explicit = switch.and_then(|s| s.hidden);
        let hidden = match (explicit, self.defaults.switch_hidden) {
            (Some(true), _) => Some(true),
            // Explicit `false` only matters where the module hides by default
            (Some(false), Some(true)) => Some(false),
            (Some(false), _) => None,
            (None, default) => default,
        };
        if let Some(hidden) = hidden {
            plan.push(BuilderCall::SetSwitchAccHidden(hidden));
        }
    }

    fn map_page(&self, plan: &mut UiPlan, mode: UiMode, page: Option<&PageConfig>) {
        let orientation = page
            .and_then(|p| p.orientation)
            .unwrap_or_else(|| mode.default_orientation());

        if let Some(page) = page {
            push_color(plan, page.background_color.as_deref(), BuilderCall::SetPageBackgroundColor);
            if let Some(path) = &page.background_image_path {
                plan.push(BuilderCall::SetPageBackgroundPath(path.clone()));
            }

            // Each half of the transition needs its partner, or the builder is
            // left with a dangling animation.
            let enter = page.enter_animation.as_deref();
            let exit = page.exit_animation.as_deref();
            if let Some(enter) = enter {
                plan.push(BuilderCall::SetAuthPageActIn {
                    auth_page_in: enter.to_string(),
                    activity_out: exit.unwrap_or(self.defaults.activity_out).to_string(),
                });
            }
            if let Some(exit) = exit {
                plan.push(BuilderCall::SetAuthPageActOut {
                    activity_in: enter.unwrap_or(self.defaults.activity_in).to_string(),
                    auth_page_out: exit.to_string(),
                });
            }
        }

        plan.push(BuilderCall::SetScreenOrientation(orientation));
    }
}

fn map_logo(plan: &mut UiPlan, logo: &LogoConfig) {
    if let Some(path) = &logo.image_path {
        plan.push(BuilderCall::SetLogoImgPath(path.clone()));
    }
    push_dimension(plan, logo.width, BuilderCall::SetLogoWidth);
    push_dimension(plan, logo.height, BuilderCall::SetLogoHeight);
    push_offset(plan, logo.offset_y, BuilderCall::SetLogoOffsetY);
    if is_set(logo.hidden) {
        plan.push(BuilderCall::SetLogoHidden(true));
    }
}

fn map_phone_number(plan: &mut UiPlan, number: &PhoneNumberConfig) {
    push_dimension(plan, number.text_size, BuilderCall::SetNumberSize);
    push_color(plan, number.text_color.as_deref(), BuilderCall::SetNumberColor);
    push_offset(plan, number.offset_y, BuilderCall::SetNumFieldOffsetY);
}

fn map_slogan(plan: &mut UiPlan, slogan: &SloganConfig) {
    if let Some(text) = &slogan.text {
        plan.push(BuilderCall::SetSloganText(text.clone()));
    }
    push_dimension(plan, slogan.text_size, BuilderCall::SetSloganTextSize);
    push_color(plan, slogan.text_color.as_deref(), BuilderCall::SetSloganTextColor);
    push_offset(plan, slogan.offset_y, BuilderCall::SetSloganOffsetY);
    if is_set(slogan.hidden) {
        plan.push(BuilderCall::SetSloganHidden(true));
    }
}

fn map_login_button(plan: &mut UiPlan, button: &LoginButtonConfig) {
    if let Some(text) = &button.text {
        plan.push(BuilderCall::SetLogBtnText(text.clone()));
    }
    push_dimension(plan, button.text_size, BuilderCall::SetLogBtnTextSize);
    push_color(plan, button.text_color.as_deref(), BuilderCall::SetLogBtnTextColor);
    push_dimension(plan, button.width, BuilderCall::SetLogBtnWidth);
    push_dimension(plan, button.height, BuilderCall::SetLogBtnHeight);
    push_offset(plan, button.offset_y, BuilderCall::SetLogBtnOffsetY);
    push_dimension(
        plan,
        button.margin_left_and_right,
        BuilderCall::SetLogBtnMarginLeftAndRight,
    );
    if let Some(path) = &button.background_path {
        plan.push(BuilderCall::SetLogBtnBackgroundPath(path.clone()));
    }
    push_color(
        plan,
        button.background_color.as_deref(),
        BuilderCall::SetLogBtnBackgroundColor,
    );
    push_dimension(plan, button.corner_radius, BuilderCall::SetLogBtnCornerRadius);
}

fn map_checkbox(plan: &mut UiPlan, checkbox: &CheckboxConfig) {
    if is_set(checkbox.hidden) {
        plan.push(BuilderCall::SetCheckboxHidden(true));
    }
    if let Some(path) = &checkbox.checked_image_path {
        plan.push(BuilderCall::SetCheckedImgPath(path.clone()));
    }
    if let Some(path) = &checkbox.unchecked_image_path {
        plan.push(BuilderCall::SetUncheckedImgPath(path.clone()));
    }
    push_dimension(plan, checkbox.size, BuilderCall::SetCheckBoxSize);
}

fn map_navigation_bar(plan: &mut UiPlan, nav: &NavigationBarConfig) {
    if let Some(title) = &nav.title {
        plan.push(BuilderCall::SetNavText(title.clone()));
    }
    push_color(plan, nav.title_color.as_deref(), BuilderCall::SetNavTextColor);
    push_color(plan, nav.background_color.as_deref(), BuilderCall::SetNavColor);
    if is_set(nav.hidden) {
        plan.push(BuilderCall::SetNavHidden(true));
    }
    if is_set(nav.return_button_hidden) {
        plan.push(BuilderCall::SetNavReturnHidden(true));
    }
    if let Some(path) = &nav.return_button_image_path {
        plan.push(BuilderCall::SetNavReturnImgPath(path.clone()));
    }
}

fn map_status_bar(plan: &mut UiPlan, status: &StatusBarConfig) {
    push_color(plan, status.color.as_deref(), BuilderCall::SetStatusBarColor);
    push_offset(plan, status.ui_flag, BuilderCall::SetStatusBarUiFlag);
    if let Some(light) = status.light_color {
        plan.push(BuilderCall::SetLightColor(light));
    }
}

fn map_dialog(plan: &mut UiPlan, mode: UiMode, dialog: Option<&DialogConfig>) {
    let empty = DialogConfig::default();
    let dialog = dialog.unwrap_or(&empty);

    push_dimension(plan, dialog.width, BuilderCall::SetDialogWidth);
    push_dimension(plan, dialog.height, BuilderCall::SetDialogHeight);
    let bottom = dialog.bottom.unwrap_or(mode == UiMode::DialogBottom);
    if bottom {
        plan.push(BuilderCall::SetDialogBottom(true));
    }
    if let Some(tap) = dialog.tap_mask_to_close {
        plan.push(BuilderCall::SetTapAuthPageMaskClosePage(tap));
    }
}

fn push_dimension(plan: &mut UiPlan, value: Option<f64>, call: fn(i32) -> BuilderCall) {
    if let Some(raw) = value {
        match dimension(raw) {
            Some(v) => plan.push(call(v)),
            None => warn!(value = raw, "Ignoring invalid size in UI configuration"),
        }
    }
}

fn push_offset(plan: &mut UiPlan, value: Option<f64>, call: fn(i32) -> BuilderCall) {
    if let Some(raw) = value {
        match offset(raw) {
            Some(v) => plan.push(call(v)),
            None => warn!(value = raw, "Ignoring invalid offset in UI configuration"),
        }
    }
}

fn push_color(plan: &mut UiPlan, value: Option<&str>, call: fn(u32) -> BuilderCall) {
    if let Some(raw) = value {
        let color = try_parse_hex_color(raw);
        if color.is_none() {
            warn!(color = raw, "Invalid color in UI configuration, using transparent");
        }
        plan.push(call(color.unwrap_or(TRANSPARENT)));
    }
}
