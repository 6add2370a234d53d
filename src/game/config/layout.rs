//! Home Screen Layout
//!
//! Pixel positions of everything on the home screen, derived once from
//! the window size. All values are y-up with the origin at the
//! bottom-left corner.

use crate::render::Rect;

/// START button size in pixels
pub const BUTTON_WIDTH: u32 = 300;
pub const BUTTON_HEIGHT: u32 = 80;

/// Popup panel size in pixels
pub const POPUP_WIDTH: u32 = 420;
pub const POPUP_HEIGHT: u32 = 180;

/// Button bottom edge as a fraction of the screen height
const BUTTON_BOTTOM_FRACTION: f64 = 0.30;
/// Hint baseline as a fraction of the screen height
const HINT_BASELINE_FRACTION: f64 = 0.18;

/// Fixed layout of the home screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HomeLayout {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Whole window
    pub screen: Rect,
    /// START button hit area and fill
    pub button: Rect,
    /// COMING SOON panel
    pub popup: Rect,
    /// Hint label baseline (centered horizontally)
    pub hint_baseline: f32,
}

/// `floor(value * fraction)` computed the way the layout always has been
fn fraction_of(value: u32, fraction: f64) -> u32 {
    (value as f64 * fraction).floor() as u32
}

impl HomeLayout {
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        // Integer division keeps every edge on a whole pixel
        let button_left = (screen_width / 2).saturating_sub(BUTTON_WIDTH / 2);
        let button_bottom = fraction_of(screen_height, BUTTON_BOTTOM_FRACTION);

        let popup_left = screen_width.saturating_sub(POPUP_WIDTH) / 2;
        let popup_bottom = screen_height.saturating_sub(POPUP_HEIGHT) / 2;

        Self {
            screen_width,
            screen_height,
            screen: Rect::from_lbwh(0.0, 0.0, screen_width as f32, screen_height as f32),
            button: Rect::from_lbwh(
                button_left as f32,
                button_bottom as f32,
                BUTTON_WIDTH as f32,
                BUTTON_HEIGHT as f32,
            ),
            popup: Rect::from_lbwh(
                popup_left as f32,
                popup_bottom as f32,
                POPUP_WIDTH as f32,
                POPUP_HEIGHT as f32,
            ),
            hint_baseline: fraction_of(screen_height, HINT_BASELINE_FRACTION) as f32,
        }
    }
}
