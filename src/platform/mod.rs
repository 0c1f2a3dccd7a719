//! Native window styling
//!
//! egui can make the overlay transparent, borderless and topmost on every
//! platform. Hiding it from the taskbar and Alt+Tab and making sure every
//! mouse event falls through needs the native extended window styles, which
//! only the Windows implementation sets.

#[cfg(windows)]
mod win32;

use anyhow::Result;
use tracing::{debug, info, warn};

/// Opaque native window handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

/// Platform hook that turns a window into a click-through overlay
pub trait OverlayStyler {
    /// Look up a top-level window by its exact title
    fn find_window(&self, title: &str) -> Option<WindowHandle>;

    /// Make the window click-through, hidden from Alt+Tab and layered
    fn apply_overlay_style(&self, window: WindowHandle) -> Result<()>;
}

/// Styler for platforms where egui's viewport flags are all we have.
/// Every window "exists" and styling always succeeds.
#[derive(Debug, Default)]
pub struct NoopStyler;

impl OverlayStyler for NoopStyler {
    fn find_window(&self, _title: &str) -> Option<WindowHandle> {
        Some(WindowHandle(0))
    }

    fn apply_overlay_style(&self, _window: WindowHandle) -> Result<()> {
        Ok(())
    }
}

/// The styler for the current platform
pub fn native_styler() -> Box<dyn OverlayStyler> {
    #[cfg(windows)]
    {
        Box::new(win32::Win32Styler)
    }
    #[cfg(not(windows))]
    {
        Box::new(NoopStyler)
    }
}

/// Frames to wait for the overlay window to appear before giving up
pub const MAX_STYLE_ATTEMPTS: u32 = 120;

/// Applies the overlay style once, as soon as the native window exists
pub struct OverlayStyleGuard {
    styler: Box<dyn OverlayStyler>,
    title: String,
    attempts: u32,
    applied: bool,
}

impl OverlayStyleGuard {
    pub fn new(styler: Box<dyn OverlayStyler>, title: impl Into<String>) -> Self {
        Self {
            styler,
            title: title.into(),
            attempts: 0,
            applied: false,
        }
    }

    pub fn is_applied(&self) -> bool {
        self.applied
    }

    pub fn is_exhausted(&self) -> bool {
        !self.applied && self.attempts >= MAX_STYLE_ATTEMPTS
    }

    /// Try to style the window; call once per overlay frame
    pub fn ensure_applied(&mut self) {
        if self.applied || self.is_exhausted() {
            return;
        }
        self.attempts += 1;

        let Some(handle) = self.styler.find_window(&self.title) else {
            debug!(attempt = self.attempts, "Overlay window not found yet");
            if self.is_exhausted() {
                warn!("Giving up on native overlay styling for '{}'", self.title);
            }
            return;
        };

        match self.styler.apply_overlay_style(handle) {
            Ok(()) => {
                info!("Overlay window styled");
                self.applied = true;
            }
            Err(e) => {
                debug!(attempt = self.attempts, "Failed to style overlay window: {}", e);
                if self.is_exhausted() {
                    warn!("Giving up on native overlay styling: {}", e);
                }
            }
        }
    }
}
