//! Win32 extended window styles for the overlay

use anyhow::{bail, Result};
use std::ffi::c_void;
use tracing::debug;
use windows::core::{HSTRING, PCWSTR};
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    FindWindowW, GetWindowLongPtrW, SetWindowLongPtrW, GWL_EXSTYLE, WS_EX_LAYERED,
    WS_EX_TOOLWINDOW, WS_EX_TRANSPARENT,
};

use super::{OverlayStyler, WindowHandle};

pub struct Win32Styler;

impl OverlayStyler for Win32Styler {
    fn find_window(&self, title: &str) -> Option<WindowHandle> {
        // SAFETY: both arguments are valid null-terminated wide strings for the call
        let hwnd = unsafe { FindWindowW(PCWSTR::null(), &HSTRING::from(title)) }.ok()?;
        if hwnd.is_invalid() {
            return None;
        }
        Some(WindowHandle(hwnd.0 as isize))
    }

    fn apply_overlay_style(&self, window: WindowHandle) -> Result<()> {
        let hwnd = HWND(window.0 as *mut c_void);
        let overlay_bits = (WS_EX_TRANSPARENT.0 | WS_EX_TOOLWINDOW.0 | WS_EX_LAYERED.0) as isize;

        // SAFETY: hwnd came from FindWindowW; a stale handle makes the call fail, not UB
        let current = unsafe { GetWindowLongPtrW(hwnd, GWL_EXSTYLE) };
        if current == 0 {
            bail!("GetWindowLongPtrW failed: {}", windows::core::Error::from_win32());
        }

        // SAFETY: as above
        unsafe { SetWindowLongPtrW(hwnd, GWL_EXSTYLE, current | overlay_bits) };
        debug!(hwnd = window.0, style = current | overlay_bits, "Updated extended window style");
        Ok(())
    }
}
