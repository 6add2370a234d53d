//! Game Module
//!
//! Game-side code built on top of the engine: settings, assets and the
//! home screen.

pub mod assets;
pub mod config;
pub mod home_screen;
pub mod ui;

pub use assets::{AssetError, BackgroundImage, home_image_path, load_background};
pub use config::{GameSettings, HomeLayout, HomePalette, SettingsError, load_settings};
pub use home_screen::{HomeScreenController, UiState};
pub use ui::{Button, ButtonVisual, Popup};
