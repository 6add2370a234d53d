//! Home Screen Palette
//!
//! Colors, border widths and label sizes for the home screen in one
//! place, so the look can be tweaked without touching the screen logic.

use crate::render::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct HomePalette {
    /// Frame clear color
    pub clear: Color,
    /// Full-screen fill when the background image is unavailable
    pub fallback_background: Color,

    // Button
    pub button_default: Color,
    pub button_hover: Color,
    pub button_pressed: Color,
    pub button_border: Color,
    pub button_border_width: f32,
    pub button_text: Color,
    pub button_text_size: f32,

    // Hint
    pub hint_text: Color,
    pub hint_text_size: f32,

    // Popup
    /// Darkens everything behind the popup
    pub overlay: Color,
    pub popup_fill: Color,
    pub popup_border: Color,
    pub popup_border_width: f32,
    pub popup_text: Color,
    pub popup_text_size: f32,
}

impl Default for HomePalette {
    fn default() -> Self {
        Self {
            clear: Color::BLACK,
            fallback_background: Color::DARK_SLATE_GRAY,

            // Dark yellow, brighter on hover, dark red once clicked
            button_default: Color::rgb(200, 150, 0),
            button_hover: Color::rgb(255, 200, 0),
            button_pressed: Color::rgb(150, 0, 0),
            button_border: Color::BLACK,
            button_border_width: 3.0,
            button_text: Color::WHITE,
            button_text_size: 30.0,

            hint_text: Color::rgb(220, 220, 220),
            hint_text_size: 12.0,

            overlay: Color::rgba(0, 0, 0, 120),
            popup_fill: Color::WHITE,
            popup_border: Color::BLACK,
            popup_border_width: 2.0,
            popup_text: Color::BLACK,
            popup_text_size: 28.0,
        }
    }
}
