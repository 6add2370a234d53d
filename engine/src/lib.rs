//! Upside Down Engine Library
//!
//! Rendering and input plumbing for the Upside Down home screen, plus
//! the game-side screen logic that drives it.
//!
//! # Modules
//!
//! - [`render`] - Canvas abstraction, headless draw list and the wgpu backend
//! - [`input`] - Platform-agnostic pointer and keyboard events
//! - [`game`] - Settings, assets and the home screen controller
//!
//! # Example
//!
//! ```no_run
//! use upside_down_engine::game::{GameSettings, HomeScreenController};
//! use upside_down_engine::render::DrawList;
//!
//! let settings = GameSettings::default();
//! let controller = HomeScreenController::new(&settings);
//!
//! let mut canvas = DrawList::new();
//! controller.render(&mut canvas);
//! assert!(!canvas.is_empty());
//! ```

pub mod input;
pub mod render;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used input types
pub use input::{InputEvent, KeyCode, ModifierState, MouseButton, PointerState};
// Re-export the canvas types the game draws with
pub use render::{Canvas, Capabilities, Color, DrawList, Rect};
