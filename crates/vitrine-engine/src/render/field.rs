use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::device::DEPTH_FORMAT;
use crate::scene::{Scene, Vertex};

use super::{RenderCtx, RenderTarget};

/// Per-instance GPU data: local model matrix as four columns + base color.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct InstanceRaw {
    m0: [f32; 4],
    m1: [f32; 4],
    m2: [f32; 4],
    m3: [f32; 4],
    color: [f32; 3],
    _pad: f32,
}

impl InstanceRaw {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x3,
    ];

    fn layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

/// Per-frame uniform block.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct SceneUniform {
    view_proj: [[f32; 4]; 4],
    group_model: [[f32; 4]; 4],
    /// xyz = camera eye (world space).
    camera_eye: [f32; 4],
    /// xyz = point light position, w = intensity.
    light: [f32; 4],
    /// x = ambient intensity, y = roughness, z = metalness.
    params: [f32; 4],
}

/// Instanced mesh renderer for the whole field.
///
/// The vertex and instance buffers are uploaded once (the group is populated
/// once and never resized); only the uniform block changes per frame, which
/// carries the aggregate group rotation and camera state.
#[derive(Default)]
pub struct FieldRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    scene_ubo: Option<wgpu::Buffer>,

    vbo: Option<wgpu::Buffer>,
    vertex_count: u32,

    instance_vbo: Option<wgpu::Buffer>,
    instance_count: u32,
}

impl FieldRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues one draw of `scene` into `target`.
    ///
    /// An empty group is valid: uniforms are still written, nothing is drawn.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, scene: &Scene) {
        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx, scene);
        self.ensure_bindings(ctx);
        self.write_scene_uniform(ctx, scene);

        if self.instance_count == 0 {
            return;
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vbo) = self.vbo.as_ref() else { return };
        let Some(instance_vbo) = self.instance_vbo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("vitrine field pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.draw(0..self.vertex_count, 0..self.instance_count);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader_src = include_str!("shaders/field.wgsl");
        let shader = ctx
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("vitrine field shader"),
                source: wgpu::ShaderSource::Wgsl(shader_src.into()),
            });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("vitrine field bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(
                                std::mem::size_of::<SceneUniform>() as u64,
                            ),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("vitrine field pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    // Newer wgpu uses immediate constants; keep disabled for now.
                    immediate_size: 0,
                });

        let pipeline = ctx
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("vitrine field pipeline"),
                layout: Some(&pipeline_layout),

                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[Vertex::layout(), InstanceRaw::layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
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
                    format: DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),

                multiview_mask: None,
                cache: None,
            });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.scene_ubo = None;
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>, scene: &Scene) {
        // instance_vbo stays None for an empty group, so the vertex buffer
        // alone gates the one-time upload.
        if self.vbo.is_some() {
            return;
        }

        self.vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("vitrine field vbo"),
            contents: bytemuck::cast_slice(scene.geometry.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.vertex_count = scene.geometry.vertex_count();

        // Instance transforms are immutable after assembly; uploaded once.
        let raws: Vec<InstanceRaw> = scene
            .group
            .instances()
            .iter()
            .map(|inst| {
                let m = inst.model();
                InstanceRaw {
                    m0: m.x_axis.to_array(),
                    m1: m.y_axis.to_array(),
                    m2: m.z_axis.to_array(),
                    m3: m.w_axis.to_array(),
                    color: inst.material.base_color,
                    _pad: 0.0,
                }
            })
            .collect();

        self.instance_count = raws.len() as u32;
        if raws.is_empty() {
            return;
        }

        self.instance_vbo = Some(ctx.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("vitrine field instances"),
                contents: bytemuck::cast_slice(&raws),
                usage: wgpu::BufferUsages::VERTEX,
            },
        ));
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.scene_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let scene_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("vitrine field scene ubo"),
            size: std::mem::size_of::<SceneUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("vitrine field bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_ubo.as_entire_binding(),
            }],
        });

        self.scene_ubo = Some(scene_ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_scene_uniform(&mut self, ctx: &RenderCtx<'_>, scene: &Scene) {
        let Some(ubo) = self.scene_ubo.as_ref() else { return };

        // Material scalars come from the template the instances were cloned
        // from; colors alone are per-instance.
        let (roughness, metalness) = scene
            .group
            .instances()
            .first()
            .map(|i| (i.material.roughness, i.material.metalness))
            .unwrap_or((1.0, 0.0));

        let uniform = SceneUniform {
            view_proj: scene.camera.view_proj().to_cols_array_2d(),
            group_model: scene.group.model().to_cols_array_2d(),
            camera_eye: scene.camera.eye.extend(1.0).to_array(),
            light: scene
                .lights
                .point
                .position
                .extend(scene.lights.point.intensity)
                .to_array(),
            params: [scene.lights.ambient.intensity, roughness, metalness, 0.0],
        };

        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&uniform));
    }
}
