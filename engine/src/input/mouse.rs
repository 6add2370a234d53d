//! Mouse Input Module
//!
//! Pointer position tracking and button identifiers.
//! Decoupled from winit except for the conversion helpers.

/// Mouse button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// Additional mouse buttons (back, forward, button 6...)
    Other(u16),
}

impl MouseButton {
    /// Convert a winit mouse button.
    pub fn from_winit(button: winit::event::MouseButton) -> Self {
        use winit::event::MouseButton as W;
        match button {
            W::Left => MouseButton::Left,
            W::Middle => MouseButton::Middle,
            W::Right => MouseButton::Right,
            W::Back => MouseButton::Other(4),
            W::Forward => MouseButton::Other(5),
            W::Other(id) => MouseButton::Other(id),
        }
    }
}

/// 2D position in y-up window pixels (origin bottom-left).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Create a new position.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Tracks the cursor across `CursorMoved` events.
///
/// winit reports surface pixels with the origin at the top-left and Y
/// growing downward. The home screen layout is y-up in its own logical
/// size, so positions are flipped and rescaled before they are stored.
#[derive(Debug, Clone)]
pub struct PointerState {
    /// Last known cursor position (y-up layout pixels).
    pub position: Option<Position>,
    surface_height: f32,
    scale_x: f32,
    scale_y: f32,
}

impl PointerState {
    /// Pointer for a surface that is exactly the layout size.
    pub fn new(window_height: u32) -> Self {
        Self {
            position: None,
            surface_height: window_height as f32,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Update the mapping after the surface changed size.
    pub fn set_viewport(&mut self, surface: (u32, u32), layout: (u32, u32)) {
        let (sw, sh) = (surface.0.max(1) as f32, surface.1.max(1) as f32);
        self.surface_height = sh;
        self.scale_x = layout.0 as f32 / sw;
        self.scale_y = layout.1 as f32 / sh;
    }

    /// Record a raw winit cursor position.
    ///
    /// Returns the y-up layout position and the delta from the previous
    /// one (zero for the first event).
    pub fn move_to(&mut self, x: f64, y: f64) -> (Position, f32, f32) {
        let current = Position::new(
            x as f32 * self.scale_x,
            (self.surface_height - y as f32) * self.scale_y,
        );
        let (dx, dy) = match self.position {
            Some(last) => (current.x - last.x, current.y - last.y),
            None => (0.0, 0.0),
        };
        self.position = Some(current);
        (current, dx, dy)
    }

    /// Forget the position (cursor left the window).
    pub fn reset(&mut self) {
        self.position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_flips_y() {
        let mut pointer = PointerState::new(720);
        let (pos, _, _) = pointer.move_to(100.0, 20.0);
        assert_eq!(pos, Position::new(100.0, 700.0));
    }

    #[test]
    fn test_pointer_delta() {
        let mut pointer = PointerState::new(600);
        let (_, dx, dy) = pointer.move_to(10.0, 10.0);
        assert_eq!((dx, dy), (0.0, 0.0));

        let (_, dx, dy) = pointer.move_to(15.0, 4.0);
        assert_eq!(dx, 5.0);
        // Moving up the screen is a positive y-up delta
        assert_eq!(dy, 6.0);
    }

    #[test]
    fn test_pointer_viewport_scaling() {
        // HiDPI surface at twice the layout size
        let mut pointer = PointerState::new(720);
        pointer.set_viewport((2560, 1440), (1280, 720));
        let (pos, _, _) = pointer.move_to(1280.0, 1440.0);
        assert_eq!(pos, Position::new(640.0, 0.0));
    }

    #[test]
    fn test_pointer_reset() {
        let mut pointer = PointerState::new(600);
        pointer.move_to(10.0, 10.0);
        pointer.reset();
        assert!(pointer.position.is_none());
        let (_, dx, dy) = pointer.move_to(50.0, 50.0);
        assert_eq!((dx, dy), (0.0, 0.0));
    }

    #[test]
    fn test_mouse_button_from_winit() {
        assert_eq!(
            MouseButton::from_winit(winit::event::MouseButton::Left),
            MouseButton::Left
        );
        assert_eq!(
            MouseButton::from_winit(winit::event::MouseButton::Other(9)),
            MouseButton::Other(9)
        );
    }
}
