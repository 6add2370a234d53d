//! Darken Overlay
//!
//! Full-screen fill drawn behind a modal panel.

use crate::render::{Canvas, Color, Rect};

/// Darken everything drawn so far.
///
/// Canvases without translucent fills get the opaque version of `color`
/// instead.
pub fn draw_darken_overlay(canvas: &mut impl Canvas, screen: Rect, color: Color) {
    let color = if canvas.capabilities().translucent_fill {
        color
    } else {
        color.opaque()
    };
    canvas.fill_rect(screen, color);
}
