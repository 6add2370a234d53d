//! Popup Panel
//!
//! White panel with a thin border and a centered message.

use crate::render::{AnchorX, AnchorY, Canvas, Color, Rect, TextLabel};

use crate::game::config::HomePalette;

#[derive(Clone, Debug)]
pub struct Popup {
    pub rect: Rect,
    pub label: TextLabel,
    fill: Color,
    border: Color,
    border_width: f32,
}

impl Popup {
    pub fn new(rect: Rect, text: &str, palette: &HomePalette) -> Self {
        let (cx, cy) = rect.center();
        let label = TextLabel::new(text, cx, cy, palette.popup_text, palette.popup_text_size)
            .with_anchor(AnchorX::Center, AnchorY::Center);
        Self {
            rect,
            label,
            fill: palette.popup_fill,
            border: palette.popup_border,
            border_width: palette.popup_border_width,
        }
    }

    /// Inclusive hit test.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.rect.contains(x, y)
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.fill_rect(self.rect, self.fill);
        canvas.outline_rect(self.rect, self.border, self.border_width);
        canvas.draw_text(&self.label);
    }
}
