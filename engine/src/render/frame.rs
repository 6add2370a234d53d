//! Frame Builder
//!
//! GPU-facing [`Canvas`] backend. Tessellates canvas calls into a single
//! colored-quad mesh plus the clear color and background placement the
//! renderer needs. Pure CPU work, so it runs without a device.

use super::canvas::{Canvas, Capabilities, Color, Rect};
use super::text::TextLabel;
use super::ui_pass::UiMesh;

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub clear_color: Color,
    /// Where to stretch the background sprite, if it was drawn
    pub background: Option<Rect>,
    pub mesh: UiMesh,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            clear_color: Color::BLACK,
            background: None,
            mesh: UiMesh::new(),
        }
    }
}

/// Builds a [`Frame`] for a screen of fixed logical size.
pub struct FrameBuilder {
    width: f32,
    height: f32,
    capabilities: Capabilities,
    /// Emit linear vertex colors (sRGB render target)
    linear_colors: bool,
    frame: Frame,
}

impl FrameBuilder {
    pub fn new(width: u32, height: u32, capabilities: Capabilities) -> Self {
        Self {
            width: width.max(1) as f32,
            height: height.max(1) as f32,
            capabilities,
            linear_colors: false,
            frame: Frame::default(),
        }
    }

    pub fn with_linear_colors(mut self, linear: bool) -> Self {
        self.linear_colors = linear;
        self
    }

    pub fn finish(self) -> Frame {
        self.frame
    }

    fn push_rect(&mut self, rect: Rect, color: Color) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let color = if self.capabilities.translucent_fill {
            color
        } else {
            color.opaque()
        };
        let [x1, y1, _] = UiMesh::screen_to_ndc(rect.left, rect.bottom, self.width, self.height);
        let [x2, y2, _] = UiMesh::screen_to_ndc(rect.right(), rect.top(), self.width, self.height);
        let rgba = if self.linear_colors {
            color.to_linear_f32_array()
        } else {
            color.to_f32_array()
        };
        self.frame.mesh.add_quad(x1, y1, x2, y2, rgba);
    }
}

impl Canvas for FrameBuilder {
    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn clear(&mut self, color: Color) {
        self.frame.clear_color = color;
        self.frame.background = None;
        self.frame.mesh.clear();
    }

    fn draw_background(&mut self, rect: Rect) {
        // The sprite pass runs before the quad pass
        if !self.frame.mesh.is_empty() {
            tracing::warn!("background drawn after UI quads; it will render underneath them");
        }
        self.frame.background = Some(rect);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push_rect(rect, color);
    }

    fn outline_rect(&mut self, rect: Rect, color: Color, border_width: f32) {
        let bw = border_width.max(0.0);
        let half = bw / 2.0;
        // Bottom and top strips span the full outer width
        self.push_rect(
            Rect::from_lbwh(rect.left - half, rect.bottom - half, rect.width + bw, bw),
            color,
        );
        self.push_rect(
            Rect::from_lbwh(rect.left - half, rect.top() - half, rect.width + bw, bw),
            color,
        );
        // Left and right strips fill the gap between them
        self.push_rect(
            Rect::from_lbwh(rect.left - half, rect.bottom + half, bw, rect.height - bw),
            color,
        );
        self.push_rect(
            Rect::from_lbwh(rect.right() - half, rect.bottom + half, bw, rect.height - bw),
            color,
        );
    }

    fn draw_text(&mut self, label: &TextLabel) {
        for pixel in label.glyph_pixels() {
            self.push_rect(pixel, label.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::text::{AnchorX, AnchorY};

    #[test]
    fn test_fill_rect_full_screen_covers_ndc() {
        let mut builder = FrameBuilder::new(800, 600, Capabilities::default());
        builder.fill_rect(Rect::from_lbwh(0.0, 0.0, 800.0, 600.0), Color::DARK_SLATE_GRAY);
        let frame = builder.finish();
        assert_eq!(frame.mesh.quad_count(), 1);
        assert_eq!(frame.mesh.vertices[0].position, [-1.0, -1.0, 0.0]);
        assert_eq!(frame.mesh.vertices[2].position, [1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_outline_is_four_strips() {
        let mut builder = FrameBuilder::new(800, 600, Capabilities::default());
        builder.outline_rect(Rect::from_lbwh(100.0, 100.0, 300.0, 80.0), Color::BLACK, 3.0);
        assert_eq!(builder.finish().mesh.quad_count(), 4);
    }

    #[test]
    fn test_zero_width_outline_draws_nothing() {
        let mut builder = FrameBuilder::new(800, 600, Capabilities::default());
        builder.outline_rect(Rect::from_lbwh(100.0, 100.0, 300.0, 80.0), Color::BLACK, 0.0);
        assert!(builder.finish().mesh.is_empty());
    }

    #[test]
    fn test_translucency_dropped_without_capability() {
        let caps = Capabilities {
            translucent_fill: false,
        };
        let mut builder = FrameBuilder::new(800, 600, caps);
        builder.fill_rect(Rect::from_lbwh(0.0, 0.0, 800.0, 600.0), Color::rgba(0, 0, 0, 120));
        let frame = builder.finish();
        assert_eq!(frame.mesh.vertices[0].color[3], 1.0);
    }

    #[test]
    fn test_clear_resets_frame() {
        let mut builder = FrameBuilder::new(800, 600, Capabilities::default());
        builder.draw_background(Rect::from_lbwh(0.0, 0.0, 800.0, 600.0));
        builder.fill_rect(Rect::from_lbwh(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        builder.clear(Color::DARK_SLATE_GRAY);
        let frame = builder.finish();
        assert_eq!(frame.clear_color, Color::DARK_SLATE_GRAY);
        assert!(frame.background.is_none());
        assert!(frame.mesh.is_empty());
    }

    #[test]
    fn test_text_one_quad_per_pixel() {
        let label = TextLabel::new("START", 400.0, 300.0, Color::WHITE, 30.0)
            .with_anchor(AnchorX::Center, AnchorY::Center);
        let mut builder = FrameBuilder::new(800, 600, Capabilities::default());
        builder.draw_text(&label);
        assert_eq!(builder.finish().mesh.quad_count(), label.glyph_pixels().len());
    }

    #[test]
    fn test_linear_colors() {
        let mut builder =
            FrameBuilder::new(800, 600, Capabilities::default()).with_linear_colors(true);
        builder.fill_rect(Rect::from_lbwh(0.0, 0.0, 1.0, 1.0), Color::rgb(128, 128, 128));
        let frame = builder.finish();
        assert!(frame.mesh.vertices[0].color[0] < 0.25);
    }
}
