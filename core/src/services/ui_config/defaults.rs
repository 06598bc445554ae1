//! Per-platform UI defaults

use na_shared::config::Platform;

/// Animation resource played when the host activity slides in
pub const DEFAULT_ACTIVITY_IN: &str = "in_activity";
/// Animation resource played when the host activity slides out
pub const DEFAULT_ACTIVITY_OUT: &str = "out_activity";

/// Defaults applied when a configuration leaves a field out
///
/// Only fields the builder must always receive, or where the module departs
/// from the vendor's own default, appear here. Everything else is left to the
/// SDK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiDefaults {
    /// Non-clickable privacy text color
    pub privacy_normal_color: u32,
    /// Privacy link color
    pub privacy_clickable_color: u32,
    /// Initial checkbox state
    pub privacy_checked: bool,
    /// `Some` when the module overrides the SDK's switch-button visibility
    pub switch_hidden: Option<bool>,
    pub activity_in: &'static str,
    pub activity_out: &'static str,
}

impl UiDefaults {
    pub fn android() -> Self {
        Self {
            privacy_normal_color: 0xFF99_9999,
            privacy_clickable_color: 0xFF18_90FF,
            privacy_checked: false,
            switch_hidden: None,
            activity_in: DEFAULT_ACTIVITY_IN,
            activity_out: DEFAULT_ACTIVITY_OUT,
        }
    }

    pub fn ios() -> Self {
        Self {
            privacy_normal_color: 0xFF99_9999,
            privacy_clickable_color: 0xFF00_7AFF,
            privacy_checked: false,
            switch_hidden: Some(true),
            activity_in: DEFAULT_ACTIVITY_IN,
            activity_out: DEFAULT_ACTIVITY_OUT,
        }
    }

    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Android => Self::android(),
            Platform::Ios => Self::ios(),
        }
    }
}

impl Default for UiDefaults {
    fn default() -> Self {
        Self::android()
    }
}
