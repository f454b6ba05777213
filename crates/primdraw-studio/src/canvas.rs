use bytemuck::{Pod, Zeroable};

use primdraw_engine::coords::{Vec2, Viewport};
use primdraw_engine::paint::Rgb;
use primdraw_engine::render::{triangulate, Renderer};
use primdraw_engine::scene::DrawCmd;

use crate::gpu::{Gpu, GpuFrame};

// ── CPU side ──────────────────────────────────────────────────────────────

/// Vertex layout (20 bytes):
///
///  offset  0  pos    [f32; 2]   loc 0
///  offset  8  color  [f32; 3]   loc 1
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CanvasVertex {
    pub pos: Vec2,
    pub color: [f32; 3],
}

impl CanvasVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x3];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CanvasVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Collects one frame's draw commands as a colored triangle list.
///
/// Commands arrive in paint order, so the shape lands on top of the grid.
pub struct FrameGeometry {
    viewport: Viewport,
    clear: Rgb,
    vertices: Vec<CanvasVertex>,
}

impl FrameGeometry {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, clear: Rgb::CLEAR_GRAY, vertices: Vec::new() }
    }

    pub fn clear_color(&self) -> Rgb {
        self.clear
    }

    pub fn vertices(&self) -> &[CanvasVertex] {
        &self.vertices
    }
}

impl Renderer for FrameGeometry {
    fn clear(&mut self, color: Rgb) {
        self.clear = color;
        self.vertices.clear();
    }

    fn draw(&mut self, cmd: &DrawCmd) {
        let color = cmd.color.to_array();
        self.vertices.extend(
            triangulate(cmd, self.viewport)
                .into_iter()
                .map(|pos| CanvasVertex { pos, color }),
        );
    }
}

// ── GPU side ──────────────────────────────────────────────────────────────

/// Draws a `FrameGeometry` into the window surface in a single pass.
#[derive(Default)]
pub struct CanvasRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,
}

impl CanvasRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, gpu: &Gpu, frame: &mut GpuFrame, geometry: &FrameGeometry) {
        self.ensure_pipeline(gpu);

        let vertices = geometry.vertices();
        if !vertices.is_empty() {
            self.ensure_capacity(gpu, vertices.len());
            if let Some(vbo) = self.vbo.as_ref() {
                gpu.queue().write_buffer(vbo, 0, bytemuck::cast_slice(vertices));
            }
        }

        let [r, g, b] = geometry.clear_color().to_array();
        let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("primdraw canvas pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &frame.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: r as f64,
                        g: g as f64,
                        b: b as f64,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        if vertices.is_empty() {
            return;
        }
        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(vbo) = self.vbo.as_ref() else { return };

        let bytes = (vertices.len() * std::mem::size_of::<CanvasVertex>()) as u64;
        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vbo.slice(..bytes));
        rpass.draw(0..vertices.len() as u32, 0..1);
    }

    fn ensure_pipeline(&mut self, gpu: &Gpu) {
        let format = gpu.surface_format();
        if self.pipeline_format == Some(format) && self.pipeline.is_some() {
            return;
        }
        let device = gpu.device();

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("primdraw canvas shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/canvas.wgsl").into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("primdraw canvas pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("primdraw canvas pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[CanvasVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
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
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(format);
        self.pipeline = Some(pipeline);
    }

    fn ensure_capacity(&mut self, gpu: &Gpu, required: usize) {
        if required <= self.vbo_capacity && self.vbo.is_some() {
            return;
        }
        let new_cap = required.next_power_of_two().max(1024);
        self.vbo = Some(gpu.device().create_buffer(&wgpu::BufferDescriptor {
            label: Some("primdraw canvas vbo"),
            size: (new_cap * std::mem::size_of::<CanvasVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vbo_capacity = new_cap;
    }
}
