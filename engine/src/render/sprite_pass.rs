//! Background Sprite Pass
//!
//! Draws a decoded RGBA image as a textured quad stretched over a
//! screen rectangle. The pixels are uploaded to the GPU once, on
//! initialize, shrunk first if it exceeds the device's texture limit;
//! the CPU copy is dropped afterwards.
//!
//! GPU resources are released on drop.

use glam::Mat4;

use super::canvas::Rect;
use super::render_pass::{FrameContext, RenderContext, RenderPass, RenderPassPriority};

/// Vertex for the textured quad (pixel position + UV).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
struct SpriteVertex {
    position: [f32; 3],
    uv: [f32; 2],
}

static_assertions::assert_eq_size!(SpriteVertex, [u8; 20]);

/// Uniform buffer layout for the sprite shader (16-byte aligned).
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SpriteUniforms {
    view_projection: [[f32; 4]; 4], // 64 bytes
    opacity: f32,                   // 4 bytes
    _pad: [f32; 3],                 // 12 bytes, total 80
}

static_assertions::assert_eq_size!(SpriteUniforms, [u8; 80]);

/// GPU objects that only exist after initialize.
struct SpriteGpu {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    pipeline: wgpu::RenderPipeline,
}

/// Full-screen background sprite.
pub struct SpritePass {
    /// Decoded pixels waiting for upload
    pending: Option<image::RgbaImage>,
    srgb_texture: bool,
    gpu: Option<SpriteGpu>,
    /// Destination rectangle this frame (None = not drawn)
    rect: Option<Rect>,
    pub image_width: u32,
    pub image_height: u32,
}

/// Quad covering `rect` in y-up pixels; image row 0 is the top edge.
fn quad_vertices(rect: Rect) -> [SpriteVertex; 4] {
    let (l, b, r, t) = (rect.left, rect.bottom, rect.right(), rect.top());
    [
        SpriteVertex { position: [l, b, 0.0], uv: [0.0, 1.0] }, // bottom-left
        SpriteVertex { position: [r, b, 0.0], uv: [1.0, 1.0] }, // bottom-right
        SpriteVertex { position: [r, t, 0.0], uv: [1.0, 0.0] }, // top-right
        SpriteVertex { position: [l, t, 0.0], uv: [0.0, 0.0] }, // top-left
    ]
}

/// Shrink `image` so neither side exceeds `max_dimension`, keeping the
/// aspect ratio. Images already within the limit are returned as-is.
pub fn fit_texture_limit(image: image::RgbaImage, max_dimension: u32) -> image::RgbaImage {
    let (width, height) = image.dimensions();
    let max = max_dimension.max(1);
    if width <= max && height <= max {
        return image;
    }

    let scale = max as f64 / width.max(height) as f64;
    let new_width = ((width as f64 * scale).round() as u32).clamp(1, max);
    let new_height = ((height as f64 * scale).round() as u32).clamp(1, max);
    tracing::warn!(
        width,
        height,
        new_width,
        new_height,
        max_dimension = max,
        "background larger than the texture limit; resizing"
    );
    image::imageops::resize(&image, new_width, new_height, image::imageops::FilterType::Triangle)
}

/// Orthographic projection from y-up pixels to clip space.
fn pixel_projection(width: u32, height: u32) -> [[f32; 4]; 4] {
    Mat4::orthographic_rh(0.0, width.max(1) as f32, 0.0, height.max(1) as f32, -1.0, 1.0)
        .to_cols_array_2d()
}

impl SpritePass {
    /// `srgb_texture` should match whether the surface format is sRGB so
    /// the image colors pass through unchanged.
    pub fn new(image: image::RgbaImage, srgb_texture: bool) -> Self {
        let (image_width, image_height) = image.dimensions();
        Self {
            pending: Some(image),
            srgb_texture,
            gpu: None,
            rect: None,
            image_width,
            image_height,
        }
    }

    /// Set where the sprite is drawn this frame.
    pub fn set_rect(&mut self, rect: Option<Rect>) {
        self.rect = rect;
    }

    fn texture_format(&self) -> wgpu::TextureFormat {
        if self.srgb_texture {
            wgpu::TextureFormat::Rgba8UnormSrgb
        } else {
            wgpu::TextureFormat::Rgba8Unorm
        }
    }

    fn create_gpu(&self, ctx: &RenderContext, rgba: &image::RgbaImage) -> SpriteGpu {
        let device = ctx.device;
        let (width, height) = rgba.dimensions();

        let texture_size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Background Texture"),
            size: texture_size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: self.texture_format(),
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            texture_size,
        );

        let texture_view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Background Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Background Uniform Buffer"),
            size: std::mem::size_of::<SpriteUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Background Vertex Buffer"),
            size: std::mem::size_of::<[SpriteVertex; 4]>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let quad_indices: [u16; 6] = [0, 1, 2, 0, 2, 3];
        let index_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Background Index Buffer"),
            size: std::mem::size_of_val(&quad_indices) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        ctx.queue.write_buffer(&index_buffer, 0, bytemuck::cast_slice(&quad_indices));

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Background Bind Group Layout"),
            entries: &[
                // @binding(0): uniforms
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                // @binding(1): texture
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                // @binding(2): sampler
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Background Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Background Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Background Shader"),
            source: wgpu::ShaderSource::Wgsl(super::SPRITE_SHADER_SOURCE.into()),
        });

        // Vertex buffer layout: 20 bytes stride, 2 attributes
        let vertex_buffer_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        };

        // The background is the first thing drawn after the clear, so it
        // simply replaces the clear color
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Background Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader_module,
                entry_point: Some("vs_main"),
                buffers: &[vertex_buffer_layout],
                compilation_options: Default::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader_module,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            multiview: None,
            cache: None,
        });

        SpriteGpu {
            _texture: texture,
            bind_group,
            uniform_buffer,
            vertex_buffer,
            index_buffer,
            pipeline,
        }
    }
}

impl RenderPass for SpritePass {
    fn name(&self) -> &'static str {
        "Background"
    }

    fn priority(&self) -> RenderPassPriority {
        RenderPassPriority::Background
    }

    fn is_enabled(&self) -> bool {
        self.rect.is_some()
    }

    fn initialize(&mut self, ctx: &RenderContext) {
        if let Some(rgba) = self.pending.take() {
            let rgba = fit_texture_limit(rgba, ctx.device.limits().max_texture_dimension_2d);
            (self.image_width, self.image_height) = rgba.dimensions();
            self.gpu = Some(self.create_gpu(ctx, &rgba));
            tracing::info!(
                width = self.image_width,
                height = self.image_height,
                "uploaded background texture"
            );
        }
    }

    fn prepare(&mut self, ctx: &RenderContext) {
        let (Some(gpu), Some(rect)) = (&self.gpu, self.rect) else {
            return;
        };

        let uniforms = SpriteUniforms {
            view_projection: pixel_projection(ctx.width, ctx.height),
            opacity: 1.0,
            _pad: [0.0; 3],
        };
        ctx.queue.write_buffer(&gpu.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        ctx.queue.write_buffer(&gpu.vertex_buffer, 0, bytemuck::cast_slice(&quad_vertices(rect)));
    }

    fn render(&self, _ctx: &RenderContext, frame: &mut FrameContext) {
        let Some(gpu) = &self.gpu else {
            return;
        };

        let mut render_pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Background Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: frame.color_view,
                resolve_target: None,
                depth_slice: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&gpu.pipeline);
        render_pass.set_bind_group(0, &gpu.bind_group, &[]);
        render_pass.set_vertex_buffer(0, gpu.vertex_buffer.slice(..));
        render_pass.set_index_buffer(gpu.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.draw_indexed(0..6, 0, 0..1);
    }
}
