//! Vendor result code tables
//!
//! The Android and iOS SDK builds define their codes independently. The
//! tables are kept apart even where they agree.

use na_shared::config::Platform;

/// Known vendor codes for one platform SDK
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCodes {
    /// Environment check passed
    pub env_available: &'static str,
    /// Token issued
    pub token_success: &'static str,
    /// Verification page displayed
    pub auth_page_started: &'static str,
    /// Back or close tapped on the verification page
    pub user_cancel: &'static str,
    /// "Other login method" tapped
    pub switch_account: &'static str,
    /// Login button tapped
    pub login_button_click: &'static str,
    /// Privacy checkbox toggled
    pub checkbox_change: &'static str,
    /// Privacy policy link tapped
    pub protocol_click: &'static str,
}

impl ResultCodes {
    pub const ANDROID: ResultCodes = ResultCodes {
        env_available: "600024",
        token_success: "600000",
        auth_page_started: "600001",
        user_cancel: "700000",
        switch_account: "700001",
        login_button_click: "700002",
        checkbox_change: "700003",
        protocol_click: "700004",
    };

    pub const IOS: ResultCodes = ResultCodes {
        env_available: "600000",
        token_success: "600000",
        auth_page_started: "600001",
        user_cancel: "700000",
        switch_account: "700001",
        login_button_click: "700002",
        checkbox_change: "700003",
        protocol_click: "700004",
    };

    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Android => Self::ANDROID,
            Platform::Ios => Self::IOS,
        }
    }

    /// Codes that belong to the UI event channel, not to terminal results
    ///
    /// `user_cancel` is excluded: it is terminal when it arrives as a result.
    pub fn is_ui_interaction(&self, code: &str) -> bool {
        code == self.switch_account
            || code == self.login_button_click
            || code == self.checkbox_change
            || code == self.protocol_click
    }
}

impl Default for ResultCodes {
    fn default() -> Self {
        Self::ANDROID
    }
}
