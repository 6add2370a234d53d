//! UI Module
//!
//! Widgets the home screen is built from.

pub mod button;
pub mod overlay;
pub mod popup;

pub use button::{Button, ButtonVisual};
pub use overlay::draw_darken_overlay;
pub use popup::Popup;
