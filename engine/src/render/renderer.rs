//! Renderer
//!
//! Owns the GPU context and the two passes (background sprite, UI quads)
//! and turns a [`Frame`] into one presented surface texture.

use std::sync::Arc;
use winit::window::Window;

use super::canvas::Color;
use super::error::RenderError;
use super::frame::{Frame, FrameBuilder};
use super::gpu_context::{GpuContext, GpuContextConfig};
use super::render_pass::{FrameContext, RenderContext, RenderPass, sort_passes};
use super::sprite_pass::SpritePass;
use super::ui_pass::UiRenderPass;

pub struct Renderer {
    gpu: GpuContext,
    /// Logical size all frame coordinates are expressed in
    layout_width: u32,
    layout_height: u32,
    sprite: Option<SpritePass>,
    ui: UiRenderPass,
}

fn pass_context(gpu: &GpuContext, width: u32, height: u32) -> RenderContext<'_> {
    RenderContext {
        device: &gpu.device,
        queue: &gpu.queue,
        surface_format: gpu.format(),
        width,
        height,
    }
}

fn to_wgpu_color(color: Color, linear: bool) -> wgpu::Color {
    let [r, g, b, a] = if linear {
        color.to_linear_f32_array()
    } else {
        color.to_f32_array()
    };
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

impl Renderer {
    /// Bring up the GPU for `window`. `background` is uploaded once and
    /// drawn wherever a frame places it.
    pub fn new(
        window: Arc<Window>,
        config: &GpuContextConfig,
        layout_size: (u32, u32),
        background: Option<image::RgbaImage>,
    ) -> Result<Self, RenderError> {
        let gpu = GpuContext::new(window, config)?;
        let srgb = gpu.is_srgb();

        let mut renderer = Self {
            layout_width: layout_size.0.max(1),
            layout_height: layout_size.1.max(1),
            sprite: background.map(|image| SpritePass::new(image, srgb)),
            ui: UiRenderPass::new(gpu.capabilities.translucent_fill),
            gpu,
        };

        let ctx = pass_context(&renderer.gpu, renderer.layout_width, renderer.layout_height);
        if let Some(sprite) = renderer.sprite.as_mut() {
            sprite.initialize(&ctx);
        }
        renderer.ui.initialize(&ctx);

        Ok(renderer)
    }

    /// A canvas for the next frame, in layout coordinates
    pub fn frame_builder(&self) -> FrameBuilder {
        FrameBuilder::new(self.layout_width, self.layout_height, self.gpu.capabilities)
            .with_linear_colors(self.gpu.is_srgb())
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    /// Draw and present a frame.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped;
    /// running out of memory is returned to the caller.
    pub fn render_frame(&mut self, frame: Frame) -> Result<(), RenderError> {
        let output = match self.gpu.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!("timed out acquiring surface texture, skipping frame");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        if let Some(sprite) = self.sprite.as_mut() {
            sprite.set_rect(frame.background);
        } else if frame.background.is_some() {
            tracing::trace!("frame placed a background but no image is loaded");
        }
        self.ui.set_mesh(frame.mesh);

        let linear = self.gpu.is_srgb();
        let clear_color = to_wgpu_color(frame.clear_color, linear);

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        // Clear pass
        {
            let _clear = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Clear Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
        }

        let ctx = pass_context(&self.gpu, self.layout_width, self.layout_height);

        let mut passes: Vec<&mut dyn RenderPass> = Vec::with_capacity(2);
        passes.push(&mut self.ui);
        if let Some(sprite) = self.sprite.as_mut() {
            passes.push(sprite);
        }
        sort_passes(&mut passes);

        let mut frame_ctx = FrameContext {
            encoder: &mut encoder,
            color_view: &view,
        };
        for pass in passes.iter_mut() {
            if !pass.is_enabled() {
                continue;
            }
            pass.prepare(&ctx);
            pass.render(&ctx, &mut frame_ctx);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_color_conversion() {
        let gray = Color::DARK_SLATE_GRAY;
        let raw = to_wgpu_color(gray, false);
        assert!((raw.r - 47.0 / 255.0).abs() < 1e-6);
        let linear = to_wgpu_color(gray, true);
        assert!(linear.r < raw.r);
        assert_eq!(linear.a, 1.0);
    }
}
