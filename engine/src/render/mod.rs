//! Render Module
//!
//! 2D rendering for the menu screens: a [`Canvas`] abstraction the UI
//! draws through, a headless recording backend for tests, and a wgpu
//! backend that draws a background sprite plus colored quads.

pub mod canvas;
pub mod error;
pub mod frame;
pub mod gpu_context;
pub mod render_pass;
pub mod renderer;
pub mod sprite_pass;
pub mod text;
pub mod ui_pass;

/// WGSL source for flat-colored UI quads
pub const UI_SHADER_SOURCE: &str = include_str!("../../../shaders/ui.wgsl");

/// WGSL source for the textured background quad
pub const SPRITE_SHADER_SOURCE: &str = include_str!("../../../shaders/sprite.wgsl");

pub use canvas::{Canvas, Capabilities, Color, DrawCommand, DrawList, Rect};
pub use error::RenderError;
pub use frame::{Frame, FrameBuilder};
pub use gpu_context::{GpuContext, GpuContextConfig, clamp_surface_size};
pub use render_pass::{FrameContext, RenderContext, RenderPass, RenderPassPriority};
pub use renderer::Renderer;
pub use sprite_pass::{SpritePass, fit_texture_limit};
pub use text::{AnchorX, AnchorY, TextLabel};
pub use ui_pass::{UiMesh, UiRenderPass, UiVertex};
