//! Upside Down - Home Screen
//!
//! Opens the game window and shows the home screen.
//!
//! Run with: `cargo run --bin upside_down`
//!
//! Settings are read from the JSON file named by `UPSIDE_DOWN_SETTINGS`,
//! else `settings.json` in the working directory, else defaults.
//! Log verbosity follows `RUST_LOG` (default `info`).
//!
//! Controls:
//! - Click START: open the "coming soon" popup
//! - Click outside the popup: close it
//! - ESC: close the popup

use std::sync::Arc;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowAttributes, WindowId};

use upside_down_engine::game::{GameSettings, HomeScreenController, load_settings};
use upside_down_engine::input::{InputEvent, KeyCode, ModifierState, MouseButton, PointerState};
use upside_down_engine::render::{GpuContextConfig, Renderer};

fn init_logging() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .try_init()
        .ok();
}

struct HomeScreenApp {
    settings: GameSettings,
    controller: HomeScreenController,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    pointer: PointerState,
    modifiers: ModifierState,
    /// Fatal error that stopped the event loop
    error: Option<anyhow::Error>,
}

impl HomeScreenApp {
    fn new(settings: GameSettings) -> Self {
        let controller = HomeScreenController::new(&settings);
        let pointer = PointerState::new(settings.screen_height);
        Self {
            settings,
            controller,
            window: None,
            renderer: None,
            pointer,
            modifiers: ModifierState::new(),
            error: None,
        }
    }

    fn layout_size(&self) -> (u32, u32) {
        (self.settings.screen_width, self.settings.screen_height)
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = WindowAttributes::default()
            .with_title(self.settings.screen_title.clone())
            .with_inner_size(PhysicalSize::new(
                self.settings.screen_width,
                self.settings.screen_height,
            ))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let background = self.controller.background().map(|bg| bg.pixels.clone());
        let renderer = Renderer::new(
            Arc::clone(&window),
            &GpuContextConfig::default(),
            self.layout_size(),
            background,
        )
        .context("failed to initialize renderer")?;

        // The window manager may not honor the requested size exactly
        let size = window.inner_size();
        self.pointer
            .set_viewport((size.width, size.height), self.layout_size());

        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        tracing::error!(error = %format!("{err:#}"), "shutting down");
        self.error = Some(err);
        event_loop.exit();
    }

    fn render(&mut self) -> Result<()> {
        let Some(renderer) = self.renderer.as_mut() else {
            return Ok(());
        };
        let mut builder = renderer.frame_builder();
        self.controller.render(&mut builder);
        renderer.render_frame(builder.finish())?;
        Ok(())
    }
}

impl ApplicationHandler for HomeScreenApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(err) = self.initialize(event_loop) {
                self.fail(event_loop, err);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = ModifierState::from_winit(modifiers.state());
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.controller.handle_event(&InputEvent::KeyPressed {
                        key: KeyCode::from_winit(code),
                        modifiers: self.modifiers,
                    });
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let (pos, dx, dy) = self.pointer.move_to(position.x, position.y);
                self.controller.handle_event(&InputEvent::PointerMoved {
                    x: pos.x,
                    y: pos.y,
                    dx,
                    dy,
                });
            }

            WindowEvent::CursorLeft { .. } => self.pointer.reset(),

            WindowEvent::MouseInput { button, state, .. } => {
                if state != ElementState::Pressed {
                    return;
                }
                // Presses arrive without a position; use the last cursor move
                let Some(pos) = self.pointer.position else {
                    tracing::trace!("mouse press before any cursor position, ignored");
                    return;
                };
                self.controller.handle_event(&InputEvent::PointerPressed {
                    x: pos.x,
                    y: pos.y,
                    button: MouseButton::from_winit(button),
                    modifiers: self.modifiers,
                });
            }

            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(new_size.width, new_size.height);
                }
                let layout = self.layout_size();
                self.pointer
                    .set_viewport((new_size.width, new_size.height), layout);
            }

            WindowEvent::RedrawRequested => {
                if let Err(err) = self.render() {
                    self.fail(event_loop, err);
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    init_logging();

    let settings = load_settings().context("failed to load settings")?;
    tracing::info!(
        width = settings.screen_width,
        height = settings.screen_height,
        title = %settings.screen_title,
        "starting"
    );

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = HomeScreenApp::new(settings);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
