//! Host platform context

use std::sync::atomic::{AtomicBool, Ordering};

use na_core::services::PlatformContext;

/// Platform context driven by the host application's lifecycle
///
/// The host flips the flags as its activity or window comes and goes.
#[derive(Debug)]
pub struct HostPlatform {
    app_context: AtomicBool,
    ui_surface: AtomicBool,
}

impl HostPlatform {
    /// App running with a foreground window
    pub fn foreground() -> Self {
        Self::with_state(true, true)
    }

    /// App running without a window that could host the page
    pub fn background() -> Self {
        Self::with_state(true, false)
    }

    /// Module not attached to a running app
    pub fn detached() -> Self {
        Self::with_state(false, false)
    }

    fn with_state(app_context: bool, ui_surface: bool) -> Self {
        Self {
            app_context: AtomicBool::new(app_context),
            ui_surface: AtomicBool::new(ui_surface),
        }
    }

    pub fn set_app_context(&self, available: bool) {
        self.app_context.store(available, Ordering::SeqCst);
    }

    pub fn set_ui_surface(&self, available: bool) {
        self.ui_surface.store(available, Ordering::SeqCst);
    }
}

impl Default for HostPlatform {
    fn default() -> Self {
        Self::foreground()
    }
}

impl PlatformContext for HostPlatform {
    fn has_app_context(&self) -> bool {
        self.app_context.load(Ordering::SeqCst)
    }

    fn has_ui_surface(&self) -> bool {
        self.ui_surface.load(Ordering::SeqCst)
    }
}
