//! Config Module
//!
//! Window settings plus the fixed layout and palette of the home screen.

pub mod layout;
pub mod palette;
pub mod settings;

pub use layout::{BUTTON_HEIGHT, BUTTON_WIDTH, HomeLayout, POPUP_HEIGHT, POPUP_WIDTH};
pub use palette::HomePalette;
pub use settings::{GameSettings, SettingsError, load_settings, settings_path};
