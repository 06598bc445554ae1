//! Declarative UI configuration for the verification page
//!
//! Every leaf is optional. Absent leaves fall back to defaults chosen by the
//! mapper; nothing here remembers a previous configuration. A leaf with the
//! wrong shape decodes as absent without disturbing its siblings.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Presentation mode of the verification page
///
/// Unrecognised modes in the dialog family decode as [`UiMode::DialogPortrait`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum UiMode {
    FullscreenPortrait,
    FullscreenLandscape,
    DialogPortrait,
    DialogLandscape,
    DialogBottom,
}

impl Default for UiMode {
    fn default() -> Self {
        UiMode::FullscreenPortrait
    }
}

impl TryFrom<String> for UiMode {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        match raw.as_str() {
            "fullscreen-portrait" => Ok(UiMode::FullscreenPortrait),
            "fullscreen-landscape" => Ok(UiMode::FullscreenLandscape),
            "dialog-portrait" => Ok(UiMode::DialogPortrait),
            "dialog-landscape" => Ok(UiMode::DialogLandscape),
            "dialog-bottom" => Ok(UiMode::DialogBottom),
            other if other.starts_with("dialog") => Ok(UiMode::DialogPortrait),
            other => Err(format!("unknown UI mode '{}'", other)),
        }
    }
}

impl UiMode {
    /// Whether this mode belongs to the dialog family
    pub fn is_dialog(&self) -> bool {
        matches!(
            self,
            UiMode::DialogPortrait | UiMode::DialogLandscape | UiMode::DialogBottom
        )
    }

    /// Orientation implied by the mode when the page config names none
    pub fn default_orientation(&self) -> Orientation {
        match self {
            UiMode::FullscreenLandscape | UiMode::DialogLandscape => Orientation::Landscape,
            _ => Orientation::Portrait,
        }
    }
}

/// Screen orientation of the verification page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    Portrait,
    Landscape,
    SensorPortrait,
    SensorLandscape,
}

/// A privacy policy link shown under the login button
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivacyPolicy {
    pub name: String,
    pub url: String,
}

/// Normal and clickable colors of the privacy text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivacyColor {
    #[serde(deserialize_with = "lenient")]
    pub normal: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub clickable: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrivacyConfig {
    #[serde(deserialize_with = "lenient")]
    pub privacy_one: Option<PrivacyPolicy>,
    #[serde(deserialize_with = "lenient")]
    pub privacy_two: Option<PrivacyPolicy>,
    #[serde(deserialize_with = "lenient")]
    pub privacy_three: Option<PrivacyPolicy>,
    #[serde(deserialize_with = "lenient")]
    pub privacy_color: Option<PrivacyColor>,
    /// Connector texts between policies, e.g. `["，", "", "和"]`
    #[serde(deserialize_with = "lenient")]
    pub privacy_connect_texts: Option<[String; 3]>,
    /// Position of the carrier's own policy among the three (0-2)
    #[serde(deserialize_with = "lenient")]
    pub privacy_operator_index: Option<f64>,
    /// Whether the privacy checkbox starts checked
    #[serde(deserialize_with = "lenient")]
    pub privacy_state: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub vendor_privacy_prefix: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub vendor_privacy_suffix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogoConfig {
    #[serde(deserialize_with = "lenient")]
    pub image_path: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub width: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub height: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub offset_y: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub hidden: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhoneNumberConfig {
    #[serde(deserialize_with = "lenient")]
    pub text_size: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub text_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub offset_y: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SloganConfig {
    #[serde(deserialize_with = "lenient")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub text_size: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub text_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub offset_y: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub hidden: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoginButtonConfig {
    #[serde(deserialize_with = "lenient")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub text_size: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub text_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub width: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub height: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub offset_y: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub margin_left_and_right: Option<f64>,
    /// Background drawable name (Android only)
    #[serde(deserialize_with = "lenient")]
    pub background_path: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub background_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub corner_radius: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwitchButtonConfig {
    #[serde(deserialize_with = "lenient")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub text_size: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub text_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub hidden: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub offset_y: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckboxConfig {
    #[serde(deserialize_with = "lenient")]
    pub hidden: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub default_state: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub checked_image_path: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub unchecked_image_path: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub size: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigationBarConfig {
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub title_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub background_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub hidden: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub return_button_hidden: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub return_button_image_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatusBarConfig {
    #[serde(deserialize_with = "lenient")]
    pub color: Option<String>,
    /// Raw system UI visibility flag (Android only)
    #[serde(deserialize_with = "lenient")]
    pub ui_flag: Option<f64>,
    /// Light status bar, which switches icons to dark
    #[serde(deserialize_with = "lenient")]
    pub light_color: Option<bool>,
}

/// Only consulted when the mode is one of the dialog modes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DialogConfig {
    #[serde(deserialize_with = "lenient")]
    pub width: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub height: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub bottom: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub tap_mask_to_close: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    #[serde(deserialize_with = "lenient")]
    pub background_color: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub background_image_path: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub enter_animation: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub exit_animation: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub orientation: Option<Orientation>,
}

/// Root of the UI configuration tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfiguration {
    #[serde(deserialize_with = "lenient")]
    pub mode: Option<UiMode>,
    #[serde(deserialize_with = "lenient")]
    pub privacy: Option<PrivacyConfig>,
    #[serde(deserialize_with = "lenient")]
    pub logo: Option<LogoConfig>,
    #[serde(deserialize_with = "lenient")]
    pub phone_number: Option<PhoneNumberConfig>,
    #[serde(deserialize_with = "lenient")]
    pub slogan: Option<SloganConfig>,
    #[serde(deserialize_with = "lenient")]
    pub login_button: Option<LoginButtonConfig>,
    #[serde(deserialize_with = "lenient")]
    pub switch_button: Option<SwitchButtonConfig>,
    #[serde(deserialize_with = "lenient")]
    pub checkbox: Option<CheckboxConfig>,
    #[serde(deserialize_with = "lenient")]
    pub navigation_bar: Option<NavigationBarConfig>,
    #[serde(deserialize_with = "lenient")]
    pub status_bar: Option<StatusBarConfig>,
    #[serde(deserialize_with = "lenient")]
    pub dialog: Option<DialogConfig>,
    #[serde(deserialize_with = "lenient")]
    pub page: Option<PageConfig>,
    /// Hide the vendor toast shown when login is tapped with the box unchecked
    #[serde(deserialize_with = "lenient")]
    pub hide_login_toast: Option<bool>,
}

impl UiConfiguration {
    /// Decode a configuration handed over by the host as JSON
    ///
    /// Malformed leaves are dropped individually. Only a value that is not an
    /// object at all is replaced by the empty configuration.
    pub fn from_json_value(value: serde_json::Value) -> Self {
        match serde_json::from_value(value) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    error = %e,
                    event = "ui_config_decode_failed",
                    "UI configuration could not be decoded, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Effective mode, defaulting to fullscreen portrait
    pub fn mode(&self) -> UiMode {
        self.mode.unwrap_or_default()
    }
}

/// Decode an optional leaf, treating a value of the wrong shape as absent
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(leaf) => Ok(Some(leaf)),
        Err(e) => {
            warn!(
                error = %e,
                event = "ui_config_leaf_ignored",
                "Ignoring malformed UI configuration value"
            );
            Ok(None)
        }
    }
}
