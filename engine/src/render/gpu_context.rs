//! GPU Context
//!
//! Device, queue and window surface for the 2D renderer.

use std::sync::Arc;
use winit::window::Window;

use super::canvas::Capabilities;
use super::error::RenderError;

/// Shared GPU resources
pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub surface_config: wgpu::SurfaceConfiguration,
    /// What the surface format supports, probed once at startup
    pub capabilities: Capabilities,
}

/// Configuration for GPU context creation
#[derive(Debug, Clone)]
pub struct GpuContextConfig {
    /// Use VSync (true = capped to monitor refresh, false = uncapped FPS)
    pub vsync: bool,
    /// Prefer high-performance GPU
    pub high_performance: bool,
}

impl Default for GpuContextConfig {
    fn default() -> Self {
        Self {
            // A static menu has no use for uncapped frames
            vsync: true,
            high_performance: false,
        }
    }
}

/// Pick a surface format, preferring non-sRGB so 8-bit colors are
/// written as-is.
pub fn choose_surface_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| !f.is_srgb())
        .or_else(|| formats.first().copied())
}

/// Clamp a surface size to the device's 2D texture limit (and at least 1x1).
pub fn clamp_surface_size(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let max = max_dimension.max(1);
    (width.clamp(1, max), height.clamp(1, max))
}

impl GpuContext {
    /// Create a new GPU context for a window
    pub fn new(window: Arc<Window>, config: &GpuContextConfig) -> Result<Self, RenderError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(Arc::clone(&window))?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: if config.high_performance {
                wgpu::PowerPreference::HighPerformance
            } else {
                wgpu::PowerPreference::LowPower
            },
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;

        let info = adapter.get_info();
        tracing::info!(adapter = %info.name, backend = ?info.backend, "selected GPU adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("Upside Down Device"),
            required_features: wgpu::Features::empty(),
            // HiDPI windows and large backgrounds need more than the 2048 floor
            required_limits: wgpu::Limits::downlevel_defaults().using_resolution(adapter.limits()),
            memory_hints: wgpu::MemoryHints::MemoryUsage,
            ..Default::default()
        }))?;

        let max_texture_dimension = device.limits().max_texture_dimension_2d;
        let (width, height) = clamp_surface_size(size.width, size.height, max_texture_dimension);
        if (width, height) != (size.width.max(1), size.height.max(1)) {
            tracing::warn!(
                window_width = size.width,
                window_height = size.height,
                max_texture_dimension,
                "window larger than the device allows; surface clamped"
            );
        }

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format =
            choose_surface_format(&surface_caps.formats).ok_or(RenderError::NoSurfaceFormat)?;

        let blendable = adapter
            .get_texture_format_features(surface_format)
            .flags
            .contains(wgpu::TextureFormatFeatureFlags::BLENDABLE);
        if !blendable {
            tracing::warn!(format = ?surface_format, "surface format is not blendable; translucent fills become opaque");
        }

        let present_mode = if config.vsync {
            wgpu::PresentMode::AutoVsync
        } else if surface_caps.present_modes.contains(&wgpu::PresentMode::Mailbox) {
            wgpu::PresentMode::Mailbox
        } else {
            wgpu::PresentMode::AutoNoVsync
        };

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        tracing::info!(
            format = ?surface_format,
            width = surface_config.width,
            height = surface_config.height,
            "configured surface"
        );

        Ok(Self {
            device,
            queue,
            surface,
            surface_config,
            capabilities: Capabilities {
                translucent_fill: blendable,
            },
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            let max = self.max_texture_dimension();
            (self.surface_config.width, self.surface_config.height) =
                clamp_surface_size(width, height, max);
            self.surface.configure(&self.device, &self.surface_config);
        }
    }

    /// Reapply the current configuration (lost or outdated surface)
    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Largest 2D texture (and surface) side the device accepts
    pub fn max_texture_dimension(&self) -> u32 {
        self.device.limits().max_texture_dimension_2d
    }

    /// Get surface format
    pub fn format(&self) -> wgpu::TextureFormat {
        self.surface_config.format
    }

    /// True when the surface encodes to sRGB on write
    pub fn is_srgb(&self) -> bool {
        self.surface_config.format.is_srgb()
    }

    /// Get current surface texture for rendering
    pub fn get_current_texture(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }
}
