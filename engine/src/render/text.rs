//! Text Rendering
//!
//! Pixel-font text labels. Each glyph is a 5x7 bitmap drawn as one
//! square per lit pixel, scaled up to the requested font size.

use super::canvas::{Color, Rect};

/// Glyph width in font pixels.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph height in font pixels.
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character (glyph plus one pixel of spacing).
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// 5x7 bitmap for a character, one byte per row, top row first.
/// Bit 4 is the leftmost column. Lowercase letters use the uppercase glyph.
pub fn get_char_bitmap(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0E],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x1B, 0x11],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x06, 0x08, 0x10, 0x1F],
        '3' => [0x0E, 0x11, 0x01, 0x06, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x0E, 0x10, 0x1E, 0x11, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x01, 0x0E],
        ' ' => [0x00; 7],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x08],
        ':' => [0x00, 0x00, 0x04, 0x00, 0x00, 0x04, 0x00],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '?' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '+' => [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00],
        // Unknown = filled box
        _ => [0x1F; 7],
    }
}

/// Horizontal anchor of a label relative to its `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorX {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical anchor of a label relative to its `y`.
///
/// The pixel font has no descenders, so `Baseline` and `Bottom` coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorY {
    #[default]
    Baseline,
    Bottom,
    Center,
    Top,
}

/// A text label built once and redrawn every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    /// Anchor point (y-up pixels)
    pub x: f32,
    pub y: f32,
    pub color: Color,
    /// Font size in points; mapped to a whole-pixel glyph scale
    pub size: f32,
    pub anchor_x: AnchorX,
    pub anchor_y: AnchorY,
}

impl TextLabel {
    /// Label anchored at its left baseline.
    pub fn new(text: impl Into<String>, x: f32, y: f32, color: Color, size: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            color,
            size,
            anchor_x: AnchorX::default(),
            anchor_y: AnchorY::default(),
        }
    }

    pub fn with_anchor(mut self, anchor_x: AnchorX, anchor_y: AnchorY) -> Self {
        self.anchor_x = anchor_x;
        self.anchor_y = anchor_y;
        self
    }

    /// Size of one font pixel on screen.
    pub fn pixel_scale(&self) -> f32 {
        (self.size / GLYPH_HEIGHT as f32).round().max(1.0)
    }

    /// Rendered width and height in screen pixels.
    pub fn extent(&self) -> (f32, f32) {
        let scale = self.pixel_scale();
        let chars = self.text.chars().count() as f32;
        let width = if chars == 0.0 {
            0.0
        } else {
            // No spacing column after the last glyph
            chars * GLYPH_ADVANCE as f32 * scale - scale
        };
        (width, GLYPH_HEIGHT as f32 * scale)
    }

    /// Screen-space box the label occupies.
    pub fn bounds(&self) -> Rect {
        let (width, height) = self.extent();
        let left = match self.anchor_x {
            AnchorX::Left => self.x,
            AnchorX::Center => self.x - width / 2.0,
            AnchorX::Right => self.x - width,
        };
        let bottom = match self.anchor_y {
            AnchorY::Baseline | AnchorY::Bottom => self.y,
            AnchorY::Center => self.y - height / 2.0,
            AnchorY::Top => self.y - height,
        };
        Rect::from_lbwh(left, bottom, width, height)
    }

    /// One square per lit font pixel, in screen space.
    pub fn glyph_pixels(&self) -> Vec<Rect> {
        let scale = self.pixel_scale();
        let bounds = self.bounds();
        let top = bounds.top();
        let mut pixels = Vec::new();

        for (char_idx, c) in self.text.chars().enumerate() {
            let bitmap = get_char_bitmap(c);
            let char_x = bounds.left + (char_idx as u32 * GLYPH_ADVANCE) as f32 * scale;

            for (row, &row_bits) in bitmap.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if (row_bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                        // Rows run top-down, screen Y runs bottom-up
                        let px = char_x + col as f32 * scale;
                        let py = top - (row as f32 + 1.0) * scale;
                        pixels.push(Rect::from_lbwh(px, py, scale, scale));
                    }
                }
            }
        }
        pixels
    }
}
