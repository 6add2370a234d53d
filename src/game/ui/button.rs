//! START Button
//!
//! A filled, outlined rectangle with a centered label. The fill color
//! follows the button's visual state.

use crate::render::{AnchorX, AnchorY, Canvas, Color, Rect, TextLabel};

use crate::game::config::HomePalette;

/// Which fill the button shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVisual {
    #[default]
    Default,
    Hover,
    Pressed,
}

impl ButtonVisual {
    /// Pressed wins over hover, hover wins over default.
    pub fn from_state(is_pressed: bool, is_hover: bool) -> Self {
        if is_pressed {
            ButtonVisual::Pressed
        } else if is_hover {
            ButtonVisual::Hover
        } else {
            ButtonVisual::Default
        }
    }

    pub fn fill_color(self, palette: &HomePalette) -> Color {
        match self {
            ButtonVisual::Default => palette.button_default,
            ButtonVisual::Hover => palette.button_hover,
            ButtonVisual::Pressed => palette.button_pressed,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Button {
    pub rect: Rect,
    pub label: TextLabel,
    border: Color,
    border_width: f32,
}

impl Button {
    pub fn new(rect: Rect, text: &str, palette: &HomePalette) -> Self {
        let (cx, cy) = rect.center();
        let label = TextLabel::new(text, cx, cy, palette.button_text, palette.button_text_size)
            .with_anchor(AnchorX::Center, AnchorY::Center);
        Self {
            rect,
            label,
            border: palette.button_border,
            border_width: palette.button_border_width,
        }
    }

    /// Inclusive hit test.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.rect.contains(x, y)
    }

    pub fn draw(&self, canvas: &mut impl Canvas, fill: Color) {
        canvas.fill_rect(self.rect, fill);
        canvas.outline_rect(self.rect, self.border, self.border_width);
        canvas.draw_text(&self.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, DrawList};

    #[test]
    fn test_visual_precedence() {
        assert_eq!(ButtonVisual::from_state(false, false), ButtonVisual::Default);
        assert_eq!(ButtonVisual::from_state(false, true), ButtonVisual::Hover);
        assert_eq!(ButtonVisual::from_state(true, false), ButtonVisual::Pressed);
        assert_eq!(ButtonVisual::from_state(true, true), ButtonVisual::Pressed);
    }

    #[test]
    fn test_draw_fill_outline_label() {
        let palette = HomePalette::default();
        let button = Button::new(Rect::from_lbwh(490.0, 216.0, 300.0, 80.0), "START", &palette);
        let mut list = DrawList::new();
        button.draw(&mut list, palette.button_hover);

        let commands = list.commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[0],
            DrawCommand::FillRect {
                rect: button.rect,
                color: Color::rgb(255, 200, 0)
            }
        );
        assert!(matches!(
            commands[1],
            DrawCommand::OutlineRect { border_width, .. } if border_width == 3.0
        ));
        match &commands[2] {
            DrawCommand::Text(label) => {
                assert_eq!(label.text, "START");
                assert_eq!((label.x, label.y), (640.0, 256.0));
            }
            other => panic!("expected label, got {other:?}"),
        }
    }
}
