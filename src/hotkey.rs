//! Global hotkey that shows or hides the crosshair

use anyhow::{anyhow, Result};
use global_hotkey::{
    hotkey::{Code, HotKey, Modifiers},
    GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState,
};
use tracing::{debug, info};

const LETTERS: [Code; 26] = [
    Code::KeyA, Code::KeyB, Code::KeyC, Code::KeyD, Code::KeyE, Code::KeyF, Code::KeyG,
    Code::KeyH, Code::KeyI, Code::KeyJ, Code::KeyK, Code::KeyL, Code::KeyM, Code::KeyN,
    Code::KeyO, Code::KeyP, Code::KeyQ, Code::KeyR, Code::KeyS, Code::KeyT, Code::KeyU,
    Code::KeyV, Code::KeyW, Code::KeyX, Code::KeyY, Code::KeyZ,
];

const DIGITS: [Code; 10] = [
    Code::Digit0, Code::Digit1, Code::Digit2, Code::Digit3, Code::Digit4,
    Code::Digit5, Code::Digit6, Code::Digit7, Code::Digit8, Code::Digit9,
];

const NUMPAD: [Code; 10] = [
    Code::Numpad0, Code::Numpad1, Code::Numpad2, Code::Numpad3, Code::Numpad4,
    Code::Numpad5, Code::Numpad6, Code::Numpad7, Code::Numpad8, Code::Numpad9,
];

const FUNCTION: [Code; 12] = [
    Code::F1, Code::F2, Code::F3, Code::F4, Code::F5, Code::F6,
    Code::F7, Code::F8, Code::F9, Code::F10, Code::F11, Code::F12,
];

/// Parses a hotkey string like "F9", "Ctrl+Shift+H", "Alt+1" into a HotKey
pub fn parse_hotkey(hotkey_str: &str) -> Result<HotKey> {
    let mut modifiers = Modifiers::empty();
    let mut key_code: Option<Code> = None;

    for part in hotkey_str.split('+').map(str::trim) {
        let upper = part.to_uppercase();
        match upper.as_str() {
            "CTRL" | "CONTROL" => modifiers |= Modifiers::CONTROL,
            "SHIFT" => modifiers |= Modifiers::SHIFT,
            "ALT" => modifiers |= Modifiers::ALT,
            "WIN" | "SUPER" | "META" => modifiers |= Modifiers::SUPER,
            key => {
                if key_code.is_some() {
                    return Err(anyhow!("More than one key in hotkey '{}'", hotkey_str));
                }
                key_code = Some(parse_key_code(key)?);
            }
        }
    }

    let code = key_code.ok_or_else(|| anyhow!("No key code found in hotkey string"))?;
    Ok(HotKey::new(Some(modifiers), code))
}

/// Parse an uppercase key name into a Code
fn parse_key_code(key: &str) -> Result<Code> {
    if let &[c] = key.as_bytes() {
        match c {
            b'A'..=b'Z' => return Ok(LETTERS[usize::from(c - b'A')]),
            b'0'..=b'9' => return Ok(DIGITS[usize::from(c - b'0')]),
            _ => {}
        }
    }

    let numbered = |prefix: &str, table: &[Code], first: usize| {
        key.strip_prefix(prefix)
            .and_then(|n| n.parse::<usize>().ok())
            .and_then(|n| n.checked_sub(first))
            .and_then(|i| table.get(i).copied())
    };

    if let Some(code) = numbered("NUMPAD", &NUMPAD, 0)
        .or_else(|| numbered("NUM", &NUMPAD, 0))
        .or_else(|| numbered("F", &FUNCTION, 1))
    {
        return Ok(code);
    }

    let code = match key {
        "SPACE" => Code::Space,
        "ENTER" | "RETURN" => Code::Enter,
        "TAB" => Code::Tab,
        "ESCAPE" | "ESC" => Code::Escape,
        "BACKSPACE" => Code::Backspace,
        "DELETE" | "DEL" => Code::Delete,
        "INSERT" | "INS" => Code::Insert,
        "HOME" => Code::Home,
        "END" => Code::End,
        "PAGEUP" | "PGUP" => Code::PageUp,
        "PAGEDOWN" | "PGDN" => Code::PageDown,
        "UP" => Code::ArrowUp,
        "DOWN" => Code::ArrowDown,
        "LEFT" => Code::ArrowLeft,
        "RIGHT" => Code::ArrowRight,
        _ => return Err(anyhow!("Unknown key code: {}", key)),
    };

    Ok(code)
}

/// Owns the registered crosshair toggle hotkey
pub struct HotkeyManager {
    manager: GlobalHotKeyManager,
    toggle_hotkey: Option<HotKey>,
}

impl HotkeyManager {
    pub fn new() -> Result<Self> {
        let manager = GlobalHotKeyManager::new()
            .map_err(|e| anyhow!("Failed to create hotkey manager: {:?}", e))?;

        Ok(Self {
            manager,
            toggle_hotkey: None,
        })
    }

    /// Register the toggle hotkey, replacing any previous one
    pub fn register_toggle_hotkey(&mut self, hotkey_str: &str) -> Result<()> {
        self.unregister_toggle_hotkey();

        let hotkey = parse_hotkey(hotkey_str)?;
        self.manager
            .register(hotkey)
            .map_err(|e| anyhow!("Failed to register hotkey: {:?}", e))?;

        self.toggle_hotkey = Some(hotkey);
        info!("Registered crosshair toggle hotkey: {}", hotkey_str);
        Ok(())
    }

    pub fn unregister_toggle_hotkey(&mut self) {
        if let Some(hotkey) = self.toggle_hotkey.take() {
            if let Err(e) = self.manager.unregister(hotkey) {
                debug!("Failed to unregister hotkey: {:?}", e);
            }
        }
    }

    /// Drain pending hotkey events.
    /// Returns true if the toggle hotkey was pressed an odd number of times.
    pub fn poll_toggle(&self) -> bool {
        let Some(id) = self.toggle_hotkey.map(|h| h.id()) else {
            return false;
        };

        let mut toggled = false;
        while let Ok(event) = GlobalHotKeyEvent::receiver().try_recv() {
            if event.id == id && event.state == HotKeyState::Pressed {
                toggled = !toggled;
            }
        }
        toggled
    }
}

impl Drop for HotkeyManager {
    fn drop(&mut self) {
        self.unregister_toggle_hotkey();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let hotkey = parse_hotkey("F9").unwrap();
        assert_eq!(hotkey, HotKey::new(Some(Modifiers::empty()), Code::F9));
    }

    #[test]
    fn test_parse_with_modifiers() {
        let hotkey = parse_hotkey("Ctrl+Shift+H").unwrap();
        assert_eq!(
            hotkey,
            HotKey::new(Some(Modifiers::CONTROL | Modifiers::SHIFT), Code::KeyH)
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(parse_hotkey("alt+f1").unwrap(), parse_hotkey("ALT+F1").unwrap());
    }

    #[test]
    fn test_parse_digits_and_numpad() {
        assert_eq!(parse_hotkey("7").unwrap(), HotKey::new(Some(Modifiers::empty()), Code::Digit7));
        assert_eq!(
            parse_hotkey("Num3").unwrap(),
            HotKey::new(Some(Modifiers::empty()), Code::Numpad3)
        );
        assert_eq!(
            parse_hotkey("Numpad0").unwrap(),
            HotKey::new(Some(Modifiers::empty()), Code::Numpad0)
        );
    }

    #[test]
    fn test_parse_function_key_range() {
        assert!(parse_hotkey("F12").is_ok());
        assert!(parse_hotkey("F0").is_err());
        assert!(parse_hotkey("F13").is_err());
    }

    #[test]
    fn test_parse_invalid_key() {
        assert!(parse_hotkey("InvalidKey").is_err());
        assert!(parse_hotkey("Ctrl+A+B").is_err());
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_hotkey("").is_err());
        assert!(parse_hotkey("Ctrl+Shift").is_err());
    }
}
