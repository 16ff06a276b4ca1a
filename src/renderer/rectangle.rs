//! Flat rectangle rendering for the buttons.
//!
//! Rectangles are queued in screen pixels each frame and rendered as one
//! batched, alpha-blended draw call. Screen space has (0,0) at the top-left;
//! the render step converts to normalized device coordinates.

use std::mem;
use wgpu::{
    self, BlendState, BufferUsages, ColorTargetState, ColorWrites, Device, FragmentState,
    MultisampleState, PrimitiveState, RenderPass, RenderPipeline, VertexAttribute,
    VertexBufferLayout, VertexFormat, VertexState, util::DeviceExt,
};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct RectangleVertex {
    /// Position in normalized device coordinates.
    position: [f32; 2],
    /// RGBA color, 0.0 to 1.0.
    color: [f32; 4],
}

impl RectangleVertex {
    fn desc<'a>() -> VertexBufferLayout<'a> {
        VertexBufferLayout {
            array_stride: mem::size_of::<RectangleVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: VertexFormat::Float32x2,
                },
                VertexAttribute {
                    offset: mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// A solid-colored rectangle in screen pixels, (0,0) at the top-left.
#[derive(Debug, Clone)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: [f32; 4],
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
        }
    }
}

/// Batch renderer for solid rectangles.
///
/// Queue rectangles with [`add_rectangle`](Self::add_rectangle), draw them
/// all with one [`render`](Self::render) call, and clear the queue when the
/// frame's widgets are rebuilt.
pub struct RectangleRenderer {
    render_pipeline: RenderPipeline,
    rectangles: Vec<Rectangle>,
    window_width: f32,
    window_height: f32,
}

impl RectangleRenderer {
    pub fn new(device: &Device, surface_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Rectangle Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/rectangle.wgsl").into()),
        });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Rectangle Pipeline Layout"),
                bind_group_layouts: &[],
                push_constant_ranges: &[],
            });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Rectangle Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[RectangleVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(ColorTargetState {
                    format: surface_format,
                    blend: Some(BlendState::ALPHA_BLENDING),
                    write_mask: ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        Self {
            render_pipeline,
            rectangles: Vec::new(),
            window_width: 1280.0,
            window_height: 800.0,
        }
    }

    pub fn add_rectangle(&mut self, rectangle: Rectangle) {
        self.rectangles.push(rectangle);
    }

    pub fn clear_rectangles(&mut self) {
        self.rectangles.clear();
    }

    /// Must track the window size or rectangles land at stale positions.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.window_width = width;
        self.window_height = height;
    }

    /// Renders every queued rectangle in a single indexed draw call.
    pub fn render(&mut self, device: &Device, render_pass: &mut RenderPass) {
        if self.rectangles.is_empty() {
            return;
        }

        render_pass.set_pipeline(&self.render_pipeline);

        let mut all_vertices = Vec::new();
        let mut all_indices = Vec::new();

        for (rect_index, rectangle) in self.rectangles.iter().enumerate() {
            // Screen px -> NDC, flipping Y (screen Y grows downward).
            let x = (rectangle.x / self.window_width) * 2.0 - 1.0;
            let y = 1.0 - (rectangle.y / self.window_height) * 2.0;
            let width = (rectangle.width / self.window_width) * 2.0;
            let height = -(rectangle.height / self.window_height) * 2.0;

            let vertices = [
                RectangleVertex {
                    position: [x, y],
                    color: rectangle.color,
                },
                RectangleVertex {
                    position: [x + width, y],
                    color: rectangle.color,
                },
                RectangleVertex {
                    position: [x + width, y + height],
                    color: rectangle.color,
                },
                RectangleVertex {
                    position: [x, y + height],
                    color: rectangle.color,
                },
            ];
            all_vertices.extend_from_slice(&vertices);

            let base_index = (rect_index * 4) as u16;
            all_indices.extend_from_slice(&[
                base_index,
                base_index + 1,
                base_index + 2,
                base_index,
                base_index + 2,
                base_index + 3,
            ]);
        }

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Rectangle Vertex Buffer"),
            contents: bytemuck::cast_slice(&all_vertices),
            usage: BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Rectangle Index Buffer"),
            contents: bytemuck::cast_slice(&all_indices),
            usage: BufferUsages::INDEX,
        });

        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        render_pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.draw_indexed(0..all_indices.len() as u32, 0, 0..1);
    }
}
