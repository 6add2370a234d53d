//! Home Screen
//!
//! The game's title screen: background image, a START button and a
//! "COMING SOON" popup. Owns the three UI flags, draws itself onto a
//! [`Canvas`] and reacts to pointer and keyboard events.
//!
//! All coordinates are y-up window pixels, origin bottom-left.

use crate::input::{InputEvent, KeyCode, ModifierState, MouseButton};
use crate::render::{AnchorX, AnchorY, Canvas, TextLabel};

use super::assets::{self, AssetError, BackgroundImage};
use super::config::{GameSettings, HomeLayout, HomePalette};
use super::ui::{Button, ButtonVisual, Popup, draw_darken_overlay};

pub const START_TEXT: &str = "START";
pub const POPUP_TEXT: &str = "COMING SOON";
pub const HINT_TEXT: &str = ".....";

/// Hover, pressed and popup flags.
///
/// `is_pressed` is only ever set together with `show_popup` and cleared
/// when the popup closes, so a pressed button always has its popup open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    is_hover: bool,
    is_pressed: bool,
    show_popup: bool,
}

impl UiState {
    pub fn is_hover(&self) -> bool {
        self.is_hover
    }

    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    pub fn show_popup(&self) -> bool {
        self.show_popup
    }

    pub fn set_hover(&mut self, hover: bool) {
        self.is_hover = hover;
    }

    /// Button clicked: pressed look and popup on.
    pub fn open_popup(&mut self) {
        self.is_pressed = true;
        self.show_popup = true;
    }

    /// Popup dismissed: pressed look goes with it.
    pub fn close_popup(&mut self) {
        self.show_popup = false;
        self.is_pressed = false;
    }

    pub fn button_visual(&self) -> ButtonVisual {
        ButtonVisual::from_state(self.is_pressed, self.is_hover)
    }
}

pub struct HomeScreenController {
    layout: HomeLayout,
    palette: HomePalette,
    state: UiState,
    background: Option<BackgroundImage>,
    button: Button,
    popup: Popup,
    hint: TextLabel,
}

impl HomeScreenController {
    /// Build the screen for the configured window, loading the background
    /// from the assets directory. A missing or unreadable image is logged
    /// and replaced by a flat fill.
    pub fn new(settings: &GameSettings) -> Self {
        let path = assets::home_image_path(&settings.assets_dir);
        let background = match assets::load_background(&path) {
            Ok(image) => Some(image),
            Err(err @ AssetError::NotFound { .. }) => {
                tracing::warn!(path = %err.path().display(), "background image not found, using flat fill");
                None
            }
            Err(err @ AssetError::Decode { .. }) => {
                tracing::warn!(error = %err, "failed to load background image, using flat fill");
                None
            }
        };
        Self::with_background(settings, background)
    }

    /// Build the screen with an already-loaded (or absent) background.
    pub fn with_background(settings: &GameSettings, background: Option<BackgroundImage>) -> Self {
        let layout = HomeLayout::new(settings.screen_width, settings.screen_height);
        let palette = HomePalette::default();

        let button = Button::new(layout.button, START_TEXT, &palette);
        let popup = Popup::new(layout.popup, POPUP_TEXT, &palette);
        let hint = TextLabel::new(
            HINT_TEXT,
            layout.screen_width as f32 / 2.0,
            layout.hint_baseline,
            palette.hint_text,
            palette.hint_text_size,
        )
        .with_anchor(AnchorX::Center, AnchorY::Baseline);

        tracing::debug!(
            button = ?layout.button,
            popup = ?layout.popup,
            has_background = background.is_some(),
            "home screen laid out"
        );

        Self {
            layout,
            palette,
            state: UiState::default(),
            background,
            button,
            popup,
            hint,
        }
    }

    pub fn layout(&self) -> &HomeLayout {
        &self.layout
    }

    pub fn palette(&self) -> &HomePalette {
        &self.palette
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn is_hover(&self) -> bool {
        self.state.is_hover()
    }

    pub fn is_pressed(&self) -> bool {
        self.state.is_pressed()
    }

    pub fn show_popup(&self) -> bool {
        self.state.show_popup()
    }

    pub fn background(&self) -> Option<&BackgroundImage> {
        self.background.as_ref()
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    pub fn popup(&self) -> &Popup {
        &self.popup
    }

    pub fn hint(&self) -> &TextLabel {
        &self.hint
    }

    /// Draw one frame.
    pub fn render(&self, canvas: &mut impl Canvas) {
        canvas.clear(self.palette.clear);

        if self.background.is_some() {
            canvas.draw_background(self.layout.screen);
        } else {
            canvas.fill_rect(self.layout.screen, self.palette.fallback_background);
        }

        let fill = self.state.button_visual().fill_color(&self.palette);
        self.button.draw(canvas, fill);
        canvas.draw_text(&self.hint);

        if self.state.show_popup() {
            draw_darken_overlay(canvas, self.layout.screen, self.palette.overlay);
            self.popup.draw(canvas);
        }
    }

    /// Pointer moved to `(x, y)`; only the position matters.
    pub fn on_mouse_motion(&mut self, x: f32, y: f32, _dx: f32, _dy: f32) {
        let hover = self.button.contains(x, y);
        if hover != self.state.is_hover() {
            tracing::trace!(hover, "button hover changed");
        }
        self.state.set_hover(hover);
    }

    /// Any mouse button went down at `(x, y)`.
    ///
    /// While the popup is open it swallows every click: outside the panel
    /// closes it, inside does nothing.
    pub fn on_mouse_press(&mut self, x: f32, y: f32, _button: MouseButton, _modifiers: ModifierState) {
        if self.state.show_popup() {
            if !self.popup.contains(x, y) {
                self.state.close_popup();
                tracing::debug!(x, y, "popup closed by outside click");
            }
            return;
        }

        if self.button.contains(x, y) {
            self.state.open_popup();
            tracing::debug!(x, y, "start pressed, popup opened");
        }
    }

    /// Escape closes an open popup; every other key is ignored.
    pub fn on_key_press(&mut self, key: KeyCode, _modifiers: ModifierState) {
        if key == KeyCode::Escape && self.state.show_popup() {
            self.state.close_popup();
            tracing::debug!("popup closed by escape");
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerMoved { x, y, dx, dy } => self.on_mouse_motion(x, y, dx, dy),
            InputEvent::PointerPressed {
                x,
                y,
                button,
                modifiers,
            } => self.on_mouse_press(x, y, button, modifiers),
            InputEvent::KeyPressed { key, modifiers } => self.on_key_press(key, modifiers),
        }
    }
}
