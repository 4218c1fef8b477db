//! Platform-agnostic keyboard event types.
//!
//! Native builds receive `crossterm` key events and web builds receive
//! `ratzilla` key events; both are converted into [`AppKeyEvent`] before they
//! reach the screens.

#[cfg(feature = "native")]
pub use crossterm::event::KeyCode;

#[cfg(all(feature = "web", not(feature = "native")))]
pub use ratzilla::event::KeyCode;

#[derive(Debug, Clone)]
pub struct AppKeyEvent {
    pub code: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl AppKeyEvent {
    /// A key press without modifiers
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    /// A key press with Control held
    pub fn with_ctrl(code: KeyCode) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(code)
        }
    }

    pub fn ctrl(&self) -> bool {
        self.ctrl
    }

    pub fn no_modifiers(&self) -> bool {
        !self.ctrl && !self.alt
    }

    /// Whether this is the character `c` typed without Control/Alt
    pub fn is_char(&self, c: char) -> bool {
        matches!(&self.code, KeyCode::Char(typed) if *typed == c) && self.no_modifiers()
    }

    /// Shift+Tab. Native terminals report a dedicated BackTab code; browsers
    /// report Tab with Shift held.
    #[cfg(feature = "native")]
    pub fn is_back_tab(&self) -> bool {
        matches!(self.code, KeyCode::BackTab)
    }

    #[cfg(all(feature = "web", not(feature = "native")))]
    pub fn is_back_tab(&self) -> bool {
        matches!(self.code, KeyCode::Tab) && self.shift
    }

    /// Plain Tab (not Shift+Tab)
    pub fn is_tab(&self) -> bool {
        matches!(self.code, KeyCode::Tab) && !self.shift
    }
}

#[cfg(feature = "native")]
impl From<crossterm::event::KeyEvent> for AppKeyEvent {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            code: event.code,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        }
    }
}

#[cfg(all(feature = "web", not(feature = "native")))]
impl From<&ratzilla::event::KeyEvent> for AppKeyEvent {
    fn from(event: &ratzilla::event::KeyEvent) -> Self {
        Self {
            code: event.code.clone(),
            ctrl: event.ctrl,
            alt: event.alt,
            shift: event.shift,
        }
    }
}
