//! Domain entities with identity or lifecycle.

pub mod operation;
pub mod ui_config;

// Re-export commonly used types
pub use operation::{OperationKind, PendingCompletion};
pub use ui_config::{
    CheckboxConfig, DialogConfig, LoginButtonConfig, LogoConfig, NavigationBarConfig,
    Orientation, PageConfig, PhoneNumberConfig, PrivacyColor, PrivacyConfig, PrivacyPolicy,
    SloganConfig, StatusBarConfig, SwitchButtonConfig, UiConfiguration, UiMode,
};
