//! Canvas
//!
//! The drawing abstraction the UI renders through. A frame is a short
//! sequence of calls on a [`Canvas`]; each backend decides what a call
//! turns into (recorded commands, GPU quads).
//!
//! All coordinates are y-up window pixels with the origin at the
//! bottom-left corner.

use super::text::TextLabel;

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const DARK_SLATE_GRAY: Color = Color::rgb(47, 79, 79);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with the alpha forced to 255.
    pub const fn opaque(self) -> Self {
        Self { a: 255, ..self }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Normalized floats for vertex colors.
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Normalized linear-space floats, for sRGB render targets.
    pub fn to_linear_f32_array(self) -> [f32; 4] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            self.a as f32 / 255.0,
        ]
    }
}

fn srgb_to_linear(c: u8) -> f32 {
    let c = c as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Axis-aligned rectangle stored corner-based (left, bottom, width, height).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Rectangle from its bottom-left corner and size.
    pub const fn from_lbwh(left: f32, bottom: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }

    /// Rectangle from its center point and size.
    pub fn from_center(center_x: f32, center_y: f32, width: f32, height: f32) -> Self {
        Self::from_lbwh(
            center_x - width / 2.0,
            center_y - height / 2.0,
            width,
            height,
        )
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn top(&self) -> f32 {
        self.bottom + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.left + self.width / 2.0, self.bottom + self.height / 2.0)
    }

    /// Inclusive hit test: points on any of the four edges are inside.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.left <= x && x <= self.right() && self.bottom <= y && y <= self.top()
    }
}

/// What a backend can draw, decided once when the backend is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Alpha-blended fills. Without it, translucent fills must be
    /// replaced by an opaque equivalent.
    pub translucent_fill: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            translucent_fill: true,
        }
    }
}

/// Drawing surface for one frame.
pub trait Canvas {
    fn capabilities(&self) -> Capabilities;

    /// Clear the whole frame.
    fn clear(&mut self, color: Color);

    /// Draw the background sprite stretched over `rect`.
    fn draw_background(&mut self, rect: Rect);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline centered on the rectangle edges.
    fn outline_rect(&mut self, rect: Rect, color: Color, border_width: f32);

    fn draw_text(&mut self, label: &TextLabel);
}

/// A recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Background(Rect),
    FillRect { rect: Rect, color: Color },
    OutlineRect {
        rect: Rect,
        color: Color,
        border_width: f32,
    },
    Text(TextLabel),
}

/// Headless backend: records every call in order.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    capabilities: Capabilities,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Replay the recorded commands onto another canvas.
    pub fn replay(&self, target: &mut impl Canvas) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => target.clear(*color),
                DrawCommand::Background(rect) => target.draw_background(*rect),
                DrawCommand::FillRect { rect, color } => target.fill_rect(*rect, *color),
                DrawCommand::OutlineRect {
                    rect,
                    color,
                    border_width,
                } => target.outline_rect(*rect, *color, *border_width),
                DrawCommand::Text(label) => target.draw_text(label),
            }
        }
    }
}

impl Canvas for DrawList {
    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_background(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Background(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn outline_rect(&mut self, rect: Rect, color: Color, border_width: f32) {
        self.commands.push(DrawCommand::OutlineRect {
            rect,
            color,
            border_width,
        });
    }

    fn draw_text(&mut self, label: &TextLabel) {
        self.commands.push(DrawCommand::Text(label.clone()));
    }
}
