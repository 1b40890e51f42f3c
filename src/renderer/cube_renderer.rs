use crate::color::{self, Color};
use crate::context::Context;
use crate::error::RenderError;
use crate::procedural::{unit_cube, CubeVertex, CUBE_VERTEX_COUNT};
use crate::renderer::{
    FrameUniforms, Renderer, ShaderProgram, ShaderSources, FRAGMENT_ENTRY_POINT,
    VERTEX_ENTRY_POINT,
};
use crate::resource::DynamicUniformBuffer;
use bytemuck::{Pod, Zeroable};
use glamx::Mat4;
use std::mem;

/// Frame-level uniforms (view, projection, camera and light).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
struct GpuFrameUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    eye: [f32; 4],
    light_position: [f32; 4],
    light_color: [f32; 4],
}

impl From<&FrameUniforms> for GpuFrameUniforms {
    fn from(frame: &FrameUniforms) -> Self {
        GpuFrameUniforms {
            view: frame.view.to_cols_array_2d(),
            proj: frame.projection.to_cols_array_2d(),
            eye: frame.eye.extend(1.0).to_array(),
            light_position: frame.light.position.extend(1.0).to_array(),
            light_color: color::to_rgba_array(frame.light.color),
        }
    }
}

/// Per-cube uniforms, selected with a dynamic offset.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
struct GpuCubeUniforms {
    model: [[f32; 4]; 4],
    normal_matrix: [[f32; 4]; 4],
    color: [f32; 4],
}

impl GpuCubeUniforms {
    fn new(transform: &Mat4, color: Color) -> Self {
        GpuCubeUniforms {
            model: transform.to_cols_array_2d(),
            normal_matrix: transform.inverse().transpose().to_cols_array_2d(),
            color: color::to_rgba_array(color),
        }
    }
}

/// Draws unit cubes with per-fragment Phong lighting.
///
/// Draws are queued by the [`Renderer`] methods and encoded by
/// [`CubeRenderer::flush`]: one 36-vertex draw call per cube, each selecting
/// its own uniform slot. Back faces are culled and depth is tested.
pub struct CubeRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    cube_bind_group_layout: wgpu::BindGroupLayout,
    cube_bind_group: wgpu::BindGroup,
    cube_uniforms: DynamicUniformBuffer<GpuCubeUniforms>,
    offsets: Vec<u32>,
    frame: Option<GpuFrameUniforms>,
    clear_color: Color,
}

impl CubeRenderer {
    /// Compiles `sources` and builds the cube pipeline.
    pub fn new(ctxt: &Context, sources: &ShaderSources) -> Result<CubeRenderer, RenderError> {
        let program = ShaderProgram::compile(ctxt, sources)?;

        let frame_bind_group_layout =
            ctxt.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("cube_renderer_frame_bind_group_layout"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    }],
                });

        let cube_bind_group_layout =
            ctxt.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("cube_renderer_cube_bind_group_layout"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: true,
                            min_binding_size: None,
                        },
                        count: None,
                    }],
                });

        let frame_buffer = ctxt.create_buffer_simple(
            Some("cube_renderer_frame_uniforms"),
            mem::size_of::<GpuFrameUniforms>() as u64,
            wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        );

        let frame_bind_group = ctxt.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cube_renderer_frame_bind_group"),
            layout: &frame_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        let cube_uniforms = DynamicUniformBuffer::new(ctxt, "cube_renderer_cube_uniforms");
        let cube_bind_group =
            Self::create_cube_bind_group(ctxt, &cube_bind_group_layout, &cube_uniforms);

        let vertex_buffer = ctxt.create_buffer_init(
            Some("cube_renderer_vertices"),
            bytemuck::cast_slice(&unit_cube()),
            wgpu::BufferUsages::VERTEX,
        );

        let pipeline_layout = ctxt
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("cube_renderer_pipeline_layout"),
                bind_group_layouts: &[&frame_bind_group_layout, &cube_bind_group_layout],
                push_constant_ranges: &[],
            });

        let vertex_buffer_layouts = [wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<CubeVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // normal
                wgpu::VertexAttribute {
                    offset: 12,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }];

        ctxt.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = ctxt
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("cube_renderer_pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: program.vertex(),
                    entry_point: Some(VERTEX_ENTRY_POINT),
                    buffers: &vertex_buffer_layouts,
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: program.fragment(),
                    entry_point: Some(FRAGMENT_ENTRY_POINT),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctxt.surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: Some(wgpu::Face::Back),
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: Context::depth_format(),
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState {
                    count: 1,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
                cache: None,
            });

        if let Some(err) = pollster::block_on(ctxt.device.pop_error_scope()) {
            return Err(RenderError::Pipeline(err.to_string()));
        }

        Ok(CubeRenderer {
            pipeline,
            vertex_buffer,
            frame_buffer,
            frame_bind_group,
            cube_bind_group_layout,
            cube_bind_group,
            cube_uniforms,
            offsets: Vec::new(),
            frame: None,
            clear_color: color::BLACK,
        })
    }

    fn create_cube_bind_group(
        ctxt: &Context,
        layout: &wgpu::BindGroupLayout,
        uniforms: &DynamicUniformBuffer<GpuCubeUniforms>,
    ) -> wgpu::BindGroup {
        ctxt.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cube_renderer_cube_bind_group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: uniforms.buffer(),
                    offset: 0,
                    size: Some(uniforms.binding_size()),
                }),
            }],
        })
    }

    /// Uploads the queued cubes and draws them into `color_view`.
    ///
    /// The color target is cleared to the frame's background and the depth
    /// target to the far plane. Does nothing if no frame was started.
    pub fn flush(
        &mut self,
        ctxt: &Context,
        color_view: &wgpu::TextureView,
        depth_view: &wgpu::TextureView,
    ) {
        let Some(frame) = self.frame else {
            return;
        };

        ctxt.write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&frame));
        if self.cube_uniforms.flush(ctxt) {
            self.cube_bind_group =
                Self::create_cube_bind_group(ctxt, &self.cube_bind_group_layout, &self.cube_uniforms);
        }

        let mut encoder = ctxt.create_command_encoder(Some("cube_renderer_encoder"));
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("cube_renderer_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: color_view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(color::to_wgpu(self.clear_color)),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.frame_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

            for offset in &self.offsets {
                render_pass.set_bind_group(1, &self.cube_bind_group, &[*offset]);
                render_pass.draw(0..CUBE_VERTEX_COUNT as u32, 0..1);
            }
        }

        ctxt.submit(std::iter::once(encoder.finish()));
    }
}

impl Renderer for CubeRenderer {
    fn begin_frame(&mut self, frame: &FrameUniforms) {
        self.frame = Some(GpuFrameUniforms::from(frame));
        self.clear_color = frame.background;
        self.cube_uniforms.clear();
        self.offsets.clear();
    }

    fn draw_cube(&mut self, transform: &Mat4, color: Color) {
        let offset = self.cube_uniforms.push(&GpuCubeUniforms::new(transform, color));
        self.offsets.push(offset);
    }
}
