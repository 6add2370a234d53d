//! UI Render Pass
//!
//! Handles rendering of 2D colored quads (rectangles, outlines, glyph
//! pixels) on top of the background. No depth testing, alpha blending
//! when the surface supports it.

use super::render_pass::{FrameContext, RenderContext, RenderPass, RenderPassPriority};

/// Vertex for UI rendering (NDC position, color)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UiVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

static_assertions::assert_eq_size!(UiVertex, [u8; 28]);

/// A UI mesh to be rendered
#[derive(Debug, Clone, Default)]
pub struct UiMesh {
    pub vertices: Vec<UiVertex>,
    pub indices: Vec<u32>,
}

impl UiMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Number of quads in the mesh
    pub fn quad_count(&self) -> usize {
        self.indices.len() / 6
    }

    /// Add a quad given two NDC corners
    pub fn add_quad(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: [f32; 4]) {
        let base = self.vertices.len() as u32;

        self.vertices.push(UiVertex { position: [x1, y1, 0.0], color });
        self.vertices.push(UiVertex { position: [x2, y1, 0.0], color });
        self.vertices.push(UiVertex { position: [x2, y2, 0.0], color });
        self.vertices.push(UiVertex { position: [x1, y2, 0.0], color });

        self.indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Convert y-up pixel coordinates to NDC
    pub fn screen_to_ndc(x: f32, y: f32, width: f32, height: f32) -> [f32; 3] {
        [(x / width) * 2.0 - 1.0, (y / height) * 2.0 - 1.0, 0.0]
    }
}

/// UI render pass that draws the current frame's quad mesh
pub struct UiRenderPass {
    enabled: bool,
    blend: bool,
    pipeline: Option<wgpu::RenderPipeline>,
    // Dynamic buffers, recreated when a frame outgrows them
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    vertex_capacity: u64,
    index_capacity: u64,
    mesh: UiMesh,
}

impl UiRenderPass {
    const INITIAL_VERTEX_BYTES: u64 = 256 * 1024;
    const INITIAL_INDEX_BYTES: u64 = 64 * 1024;

    /// `blend` selects alpha blending; without it every quad replaces
    /// what is below it (formats that are not blendable reject any
    /// blend state).
    pub fn new(blend: bool) -> Self {
        Self {
            enabled: true,
            blend,
            pipeline: None,
            vertex_buffer: None,
            index_buffer: None,
            vertex_capacity: 0,
            index_capacity: 0,
            mesh: UiMesh::new(),
        }
    }

    /// Set the mesh to render this frame
    pub fn set_mesh(&mut self, mesh: UiMesh) {
        self.mesh = mesh;
    }

    fn create_buffer(device: &wgpu::Device, label: &str, size: u64, usage: wgpu::BufferUsages) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Grow the dynamic buffers to fit the current mesh
    fn ensure_capacity(&mut self, device: &wgpu::Device) {
        let vertex_bytes = std::mem::size_of_val(self.mesh.vertices.as_slice()) as u64;
        if vertex_bytes > self.vertex_capacity {
            let size = vertex_bytes.next_power_of_two().max(Self::INITIAL_VERTEX_BYTES);
            self.vertex_buffer = Some(Self::create_buffer(device, "UI Vertex Buffer", size, wgpu::BufferUsages::VERTEX));
            self.vertex_capacity = size;
            tracing::debug!(size, "grew UI vertex buffer");
        }

        let index_bytes = std::mem::size_of_val(self.mesh.indices.as_slice()) as u64;
        if index_bytes > self.index_capacity {
            let size = index_bytes.next_power_of_two().max(Self::INITIAL_INDEX_BYTES);
            self.index_buffer = Some(Self::create_buffer(device, "UI Index Buffer", size, wgpu::BufferUsages::INDEX));
            self.index_capacity = size;
            tracing::debug!(size, "grew UI index buffer");
        }
    }
}

impl RenderPass for UiRenderPass {
    fn name(&self) -> &'static str {
        "UI"
    }

    fn priority(&self) -> RenderPassPriority {
        RenderPassPriority::UI
    }

    fn is_enabled(&self) -> bool {
        self.enabled && !self.mesh.is_empty()
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn initialize(&mut self, ctx: &RenderContext) {
        if self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("UI Shader"),
            source: wgpu::ShaderSource::Wgsl(super::UI_SHADER_SOURCE.into()),
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("UI Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        // No depth testing, alpha blending when available
        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("UI Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<UiVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x3,
                            offset: 0,
                            shader_location: 0,
                        },
                        wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x4,
                            offset: 12,
                            shader_location: 1,
                        },
                    ],
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: self.blend.then_some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        self.pipeline = Some(pipeline);
    }

    fn prepare(&mut self, ctx: &RenderContext) {
        if self.mesh.is_empty() {
            return;
        }
        self.ensure_capacity(ctx.device);
        if let (Some(vertex_buffer), Some(index_buffer)) = (&self.vertex_buffer, &self.index_buffer) {
            ctx.queue.write_buffer(vertex_buffer, 0, bytemuck::cast_slice(&self.mesh.vertices));
            ctx.queue.write_buffer(index_buffer, 0, bytemuck::cast_slice(&self.mesh.indices));
        }
    }

    fn render(&self, _ctx: &RenderContext, frame: &mut FrameContext) {
        let (Some(pipeline), Some(vertex_buffer), Some(index_buffer)) =
            (&self.pipeline, &self.vertex_buffer, &self.index_buffer)
        else {
            return;
        };

        let mut render_pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("UI Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: frame.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load, // Preserve clear + background
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(pipeline);
        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        render_pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.mesh.indices.len() as u32, 0, 0..1);
    }
}
