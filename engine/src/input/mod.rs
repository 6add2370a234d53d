//! Input Module
//!
//! Platform-agnostic input events for the home screen. The winit event
//! loop converts its events into [`InputEvent`] values so the UI logic
//! can be driven (and tested) without a window.
//!
//! # Example
//!
//! ```rust,ignore
//! use upside_down_engine::input::{InputEvent, KeyCode, ModifierState};
//!
//! let event = InputEvent::KeyPressed {
//!     key: KeyCode::Escape,
//!     modifiers: ModifierState::new(),
//! };
//! controller.handle_event(&event);
//! ```

pub mod keyboard;
pub mod mouse;

pub use keyboard::{KeyCode, ModifierState};
pub use mouse::{MouseButton, PointerState, Position};

/// A single input event in y-up window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to `(x, y)`, `(dx, dy)` since the previous move.
    PointerMoved { x: f32, y: f32, dx: f32, dy: f32 },
    /// A mouse button went down at `(x, y)`.
    PointerPressed {
        x: f32,
        y: f32,
        button: MouseButton,
        modifiers: ModifierState,
    },
    /// A key went down.
    KeyPressed {
        key: KeyCode,
        modifiers: ModifierState,
    },
}
