//! Keyboard Input Module
//!
//! Key codes and modifier state, decoupled from winit.

/// Generic key codes, independent of windowing system.
///
/// Only the keys the home screen can react to get their own variant;
/// everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Enter,
    Space,
    Tab,
    Backspace,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// Any key without a dedicated variant
    Other,
}

impl KeyCode {
    /// Convert a winit physical key code.
    pub fn from_winit(key: winit::keyboard::KeyCode) -> Self {
        use winit::keyboard::KeyCode as W;
        match key {
            W::Escape => KeyCode::Escape,
            W::Enter | W::NumpadEnter => KeyCode::Enter,
            W::Space => KeyCode::Space,
            W::Tab => KeyCode::Tab,
            W::Backspace => KeyCode::Backspace,
            W::ArrowUp => KeyCode::ArrowUp,
            W::ArrowDown => KeyCode::ArrowDown,
            W::ArrowLeft => KeyCode::ArrowLeft,
            W::ArrowRight => KeyCode::ArrowRight,
            _ => KeyCode::Other,
        }
    }
}

/// State of keyboard modifier keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierState {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl ModifierState {
    /// Create a new empty modifier state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no modifiers are pressed.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.meta
    }

    /// Convert winit's modifier bitset.
    pub fn from_winit(state: winit::keyboard::ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
            meta: state.super_key(),
        }
    }
}
