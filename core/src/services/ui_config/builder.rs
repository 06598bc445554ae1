//! Vendor builder calls

use std::collections::BTreeMap;

/// One call on the vendor's UI configuration builder
///
/// Names follow the vendor setters. Colors are packed `0xAARRGGBB`, sizes are
/// dp/sp integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderCall {
    // ── Reset and listener ──
    RemoveAuthRegisterXmlConfig,
    RemoveAuthRegisterViewConfig,
    SetUiClickListener,

    // ── Privacy ──
    SetAppPrivacyOne { name: String, url: String },
    SetAppPrivacyTwo { name: String, url: String },
    SetAppPrivacyThree { name: String, url: String },
    SetAppPrivacyColor { normal: u32, clickable: u32 },
    SetPrivacyConectTexts([String; 3]),
    SetPrivacyOperatorIndex(usize),
    SetPrivacyState(bool),
    SetVendorPrivacyPrefix(String),
    SetVendorPrivacySuffix(String),

    // ── Logo ──
    SetLogoImgPath(String),
    SetLogoWidth(i32),
    SetLogoHeight(i32),
    SetLogoOffsetY(i32),
    SetLogoHidden(bool),

    // ── Phone number ──
    SetNumberSize(i32),
    SetNumberColor(u32),
    SetNumFieldOffsetY(i32),

    // ── Slogan ──
    SetSloganText(String),
    SetSloganTextSize(i32),
    SetSloganTextColor(u32),
    SetSloganOffsetY(i32),
    SetSloganHidden(bool),

    // ── Login button ──
    SetLogBtnText(String),
    SetLogBtnTextSize(i32),
    SetLogBtnTextColor(u32),
    SetLogBtnWidth(i32),
    SetLogBtnHeight(i32),
    SetLogBtnOffsetY(i32),
    SetLogBtnMarginLeftAndRight(i32),
    SetLogBtnBackgroundPath(String),
    SetLogBtnBackgroundColor(u32),
    SetLogBtnCornerRadius(i32),
    SetLogBtnToastHidden(bool),

    // ── Switch account ──
    SetSwitchAccText(String),
    SetSwitchAccTextSize(i32),
    SetSwitchAccTextColor(u32),
    SetSwitchAccHidden(bool),
    SetSwitchOffsetY(i32),

    // ── Checkbox ──
    SetCheckboxHidden(bool),
    SetCheckedImgPath(String),
    SetUncheckedImgPath(String),
    SetCheckBoxSize(i32),

    // ── Navigation bar ──
    SetNavText(String),
    SetNavTextColor(u32),
    SetNavColor(u32),
    SetNavHidden(bool),
    SetNavReturnHidden(bool),
    SetNavReturnImgPath(String),

    // ── Status bar ──
    SetStatusBarColor(u32),
    SetStatusBarUiFlag(i32),
    SetLightColor(bool),

    // ── Dialog ──
    SetDialogWidth(i32),
    SetDialogHeight(i32),
    SetDialogBottom(bool),
    SetTapAuthPageMaskClosePage(bool),

    // ── Page ──
    SetPageBackgroundColor(u32),
    SetPageBackgroundPath(String),
    SetAuthPageActIn { auth_page_in: String, activity_out: String },
    SetAuthPageActOut { activity_in: String, auth_page_out: String },
    SetScreenOrientation(crate::domain::Orientation),
}

impl BuilderCall {
    /// Vendor setter this call targets
    ///
    /// Calls with the same setter overwrite each other; different setters are
    /// independent.
    pub fn setter(&self) -> &'static str {
        use BuilderCall::*;
        match self {
            RemoveAuthRegisterXmlConfig => "removeAuthRegisterXmlConfig",
            RemoveAuthRegisterViewConfig => "removeAuthRegisterViewConfig",
            SetUiClickListener => "setUIClickListener",
            SetAppPrivacyOne { .. } => "setAppPrivacyOne",
            SetAppPrivacyTwo { .. } => "setAppPrivacyTwo",
            SetAppPrivacyThree { .. } => "setAppPrivacyThree",
            SetAppPrivacyColor { .. } => "setAppPrivacyColor",
            SetPrivacyConectTexts(_) => "setPrivacyConectTexts",
            SetPrivacyOperatorIndex(_) => "setPrivacyOperatorIndex",
            SetPrivacyState(_) => "setPrivacyState",
            SetVendorPrivacyPrefix(_) => "setVendorPrivacyPrefix",
            SetVendorPrivacySuffix(_) => "setVendorPrivacySuffix",
            SetLogoImgPath(_) => "setLogoImgPath",
            SetLogoWidth(_) => "setLogoWidth",
            SetLogoHeight(_) => "setLogoHeight",
            SetLogoOffsetY(_) => "setLogoOffsetY",
            SetLogoHidden(_) => "setLogoHidden",
            SetNumberSize(_) => "setNumberSize",
            SetNumberColor(_) => "setNumberColor",
            SetNumFieldOffsetY(_) => "setNumFieldOffsetY",
            SetSloganText(_) => "setSloganText",
            SetSloganTextSize(_) => "setSloganTextSize",
            SetSloganTextColor(_) => "setSloganTextColor",
            SetSloganOffsetY(_) => "setSloganOffsetY",
            SetSloganHidden(_) => "setSloganHidden",
            SetLogBtnText(_) => "setLogBtnText",
            SetLogBtnTextSize(_) => "setLogBtnTextSize",
            SetLogBtnTextColor(_) => "setLogBtnTextColor",
            SetLogBtnWidth(_) => "setLogBtnWidth",
            SetLogBtnHeight(_) => "setLogBtnHeight",
            SetLogBtnOffsetY(_) => "setLogBtnOffsetY",
            SetLogBtnMarginLeftAndRight(_) => "setLogBtnMarginLeftAndRight",
            SetLogBtnBackgroundPath(_) => "setLogBtnBackgroundPath",
            SetLogBtnBackgroundColor(_) => "setLogBtnBackgroundColor",
            SetLogBtnCornerRadius(_) => "setLogBtnCornerRadius",
            SetLogBtnToastHidden(_) => "setLogBtnToastHidden",
            SetSwitchAccText(_) => "setSwitchAccText",
            SetSwitchAccTextSize(_) => "setSwitchAccTextSize",
            SetSwitchAccTextColor(_) => "setSwitchAccTextColor",
            SetSwitchAccHidden(_) => "setSwitchAccHidden",
            SetSwitchOffsetY(_) => "setSwitchOffsetY",
            SetCheckboxHidden(_) => "setCheckboxHidden",
            SetCheckedImgPath(_) => "setCheckedImgPath",
            SetUncheckedImgPath(_) => "setUncheckedImgPath",
            SetCheckBoxSize(_) => "setCheckBoxWidth",
            SetNavText(_) => "setNavText",
            SetNavTextColor(_) => "setNavTextColor",
            SetNavColor(_) => "setNavColor",
            SetNavHidden(_) => "setNavHidden",
            SetNavReturnHidden(_) => "setNavReturnHidden",
            SetNavReturnImgPath(_) => "setNavReturnImgPath",
            SetStatusBarColor(_) => "setStatusBarColor",
            SetStatusBarUiFlag(_) => "setStatusBarUIFlag",
            SetLightColor(_) => "setLightColor",
            SetDialogWidth(_) => "setDialogWidth",
            SetDialogHeight(_) => "setDialogHeight",
            SetDialogBottom(_) => "setDialogBottom",
            SetTapAuthPageMaskClosePage(_) => "setTapAuthPageMaskClosePage",
            SetPageBackgroundColor(_) => "setPageBackgroundColor",
            SetPageBackgroundPath(_) => "setPageBackgroundPath",
            SetAuthPageActIn { .. } => "setAuthPageActIn",
            SetAuthPageActOut { .. } => "setAuthPageActOut",
            SetScreenOrientation(_) => "setScreenOrientation",
        }
    }
}

/// Ordered list of builder calls produced for one configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiPlan {
    calls: Vec<BuilderCall>,
}

impl UiPlan {
    pub(crate) fn push(&mut self, call: BuilderCall) {
        self.calls.push(call);
    }

    pub fn calls(&self) -> &[BuilderCall] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BuilderCall> {
        self.calls.iter()
    }

    /// Final builder state after applying every call in order
    pub fn state(&self) -> BuilderState {
        BuilderState::from_calls(&self.calls)
    }
}

impl IntoIterator for UiPlan {
    type Item = BuilderCall;
    type IntoIter = std::vec::IntoIter<BuilderCall>;

    fn into_iter(self) -> Self::IntoIter {
        self.calls.into_iter()
    }
}

/// Builder state keyed by setter, last call wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuilderState {
    fields: BTreeMap<&'static str, BuilderCall>,
}

impl BuilderState {
    pub fn from_calls<'a>(calls: impl IntoIterator<Item = &'a BuilderCall>) -> Self {
        let mut state = Self::default();
        for call in calls {
            state.apply(call.clone());
        }
        state
    }

    pub fn apply(&mut self, call: BuilderCall) {
        self.fields.insert(call.setter(), call);
    }

    pub fn get(&self, setter: &str) -> Option<&BuilderCall> {
        self.fields.get(setter)
    }

    pub fn contains(&self, setter: &str) -> bool {
        self.fields.contains_key(setter)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn setters(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }
}
