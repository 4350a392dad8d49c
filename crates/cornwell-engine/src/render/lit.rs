use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::render::{BlendMode, LightRig, Mesh, MeshId, PointLight, RenderCtx, RenderTarget, Vertex, MAX_LIGHTS};
use crate::scene::{MeshDraw, SceneFrame};

/// Renderer for colored triangle meshes under a [`LightRig`].
///
/// Resources are created lazily:
/// - pipelines (one per `BlendMode`) when the surface or depth format changes
/// - the globals UBO once
/// - the per-draw UBO grows to the largest draw count seen so far
///
/// Meshes are uploaded once through [`upload`](Self::upload) and referenced by
/// [`MeshId`] afterwards.
#[derive(Default)]
pub struct LitRenderer {
    pipeline_formats: Option<(wgpu::TextureFormat, wgpu::TextureFormat)>,
    opaque_pipeline: Option<wgpu::RenderPipeline>,
    alpha_pipeline: Option<wgpu::RenderPipeline>,

    globals_layout: Option<wgpu::BindGroupLayout>,
    object_layout: Option<wgpu::BindGroupLayout>,

    globals_ubo: Option<wgpu::Buffer>,
    globals_bind_group: Option<wgpu::BindGroup>,

    object_ubo: Option<wgpu::Buffer>,
    object_bind_group: Option<wgpu::BindGroup>,
    object_capacity: usize,
    object_stride: u64,

    meshes: Vec<GpuMesh>,
    warned_unknown_mesh: bool,
}

struct GpuMesh {
    vbo: wgpu::Buffer,
    ibo: wgpu::Buffer,
    index_count: u32,
}

impl LitRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads `mesh` to GPU buffers and returns its handle.
    pub fn upload(&mut self, device: &wgpu::Device, mesh: &Mesh) -> MeshId {
        let id = MeshId(self.meshes.len() as u32);

        let vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cornwell lit mesh vbo"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let ibo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cornwell lit mesh ibo"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::debug!(
            "uploaded mesh {:?}: {} vertices, {} indices",
            id,
            mesh.vertex_count(),
            mesh.index_count()
        );

        self.meshes.push(GpuMesh {
            vbo,
            ibo,
            index_count: mesh.index_count(),
        });
        id
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, frame: &SceneFrame) {
        self.ensure_pipelines(ctx);
        self.ensure_globals(ctx);

        let mut objects: Vec<ObjectUniform> = Vec::with_capacity(frame.draws().len());
        let mut mesh_slots: Vec<usize> = Vec::with_capacity(frame.draws().len());

        for draw in frame.draws() {
            let slot = draw.mesh.0 as usize;
            let Some(mesh) = self.meshes.get(slot) else {
                if !self.warned_unknown_mesh {
                    log::warn!("draw references unknown mesh {:?}; skipping", draw.mesh);
                    self.warned_unknown_mesh = true;
                }
                continue;
            };
            if mesh.index_count == 0 {
                continue;
            }
            objects.push(ObjectUniform::new(draw));
            mesh_slots.push(slot);
        }

        if objects.is_empty() {
            return;
        }

        self.write_globals(ctx, frame);
        self.ensure_object_capacity(ctx, objects.len());
        self.write_objects(ctx, &objects);

        let pipeline = match frame.blend {
            BlendMode::Opaque => self.opaque_pipeline.as_ref(),
            BlendMode::Alpha => self.alpha_pipeline.as_ref(),
        };
        let Some(pipeline) = pipeline else { return };
        let Some(globals_bind_group) = self.globals_bind_group.as_ref() else { return };
        let Some(object_bind_group) = self.object_bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("cornwell lit pass"),
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
        rpass.set_bind_group(0, globals_bind_group, &[]);

        for (i, &slot) in mesh_slots.iter().enumerate() {
            let mesh = &self.meshes[slot];
            let offset = (i as u64 * self.object_stride) as wgpu::DynamicOffset;

            rpass.set_bind_group(1, object_bind_group, &[offset]);
            rpass.set_vertex_buffer(0, mesh.vbo.slice(..));
            rpass.set_index_buffer(mesh.ibo.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        let formats = (ctx.surface_format, ctx.depth_format);
        if self.pipeline_formats == Some(formats) && self.opaque_pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("cornwell lit shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/lit.wgsl").into()),
        });

        let globals_layout = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("cornwell lit globals bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: uniform_size::<GlobalsUniform>(),
                },
                count: None,
            }],
        });

        let object_layout = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("cornwell lit object bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: uniform_size::<ObjectUniform>(),
                },
                count: None,
            }],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("cornwell lit pipeline layout"),
            bind_group_layouts: &[&globals_layout, &object_layout],
            immediate_size: 0,
        });

        let build = |blend: BlendMode| {
            ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(match blend {
                    BlendMode::Opaque => "cornwell lit pipeline (opaque)",
                    BlendMode::Alpha => "cornwell lit pipeline (alpha)",
                }),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[Vertex::layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: blend.blend_state(),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    // Back faces stay visible through translucent geometry.
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: ctx.depth_format,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::Less,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
        };

        self.opaque_pipeline = Some(build(BlendMode::Opaque));
        self.alpha_pipeline = Some(build(BlendMode::Alpha));
        self.pipeline_formats = Some(formats);
        self.globals_layout = Some(globals_layout);
        self.object_layout = Some(object_layout);

        // Bind groups belong to the old layouts.
        self.globals_ubo = None;
        self.globals_bind_group = None;
        self.object_ubo = None;
        self.object_bind_group = None;
        self.object_capacity = 0;

        log::debug!("lit pipelines built for {:?} / {:?}", formats.0, formats.1);
    }

    fn ensure_globals(&mut self, ctx: &RenderCtx<'_>) {
        if self.globals_bind_group.is_some() && self.globals_ubo.is_some() {
            return;
        }
        let Some(layout) = self.globals_layout.as_ref() else { return };

        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cornwell lit globals ubo"),
            size: std::mem::size_of::<GlobalsUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cornwell lit globals bind group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        self.globals_ubo = Some(ubo);
        self.globals_bind_group = Some(bind_group);
    }

    fn ensure_object_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.object_capacity && self.object_bind_group.is_some() {
            return;
        }
        let Some(layout) = self.object_layout.as_ref() else { return };

        let align = ctx.device.limits().min_uniform_buffer_offset_alignment as u64;
        let stride = object_stride(align);
        let capacity = required.next_power_of_two().max(4);

        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cornwell lit object ubo"),
            size: stride * capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cornwell lit object bind group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &ubo,
                    offset: 0,
                    size: uniform_size::<ObjectUniform>(),
                }),
            }],
        });

        self.object_stride = stride;
        self.object_capacity = capacity;
        self.object_ubo = Some(ubo);
        self.object_bind_group = Some(bind_group);
    }

    fn write_globals(&self, ctx: &RenderCtx<'_>, frame: &SceneFrame) {
        let Some(ubo) = self.globals_ubo.as_ref() else { return };
        let globals = GlobalsUniform::new(frame, ctx.viewport.aspect());
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&globals));
    }

    fn write_objects(&self, ctx: &RenderCtx<'_>, objects: &[ObjectUniform]) {
        let Some(ubo) = self.object_ubo.as_ref() else { return };
        let stride = self.object_stride as usize;

        let mut bytes = vec![0u8; stride * objects.len()];
        for (chunk, object) in bytes.chunks_exact_mut(stride).zip(objects) {
            let raw = bytemuck::bytes_of(object);
            chunk[..raw.len()].copy_from_slice(raw);
        }
        ctx.queue.write_buffer(ubo, 0, &bytes);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

fn uniform_size<T>() -> Option<wgpu::BufferSize> {
    wgpu::BufferSize::new(std::mem::size_of::<T>() as u64)
}

/// Per-draw stride in the object UBO, rounded up to the dynamic offset alignment.
fn object_stride(align: u64) -> u64 {
    let size = std::mem::size_of::<ObjectUniform>() as u64;
    size.div_ceil(align.max(1)) * align.max(1)
}

/// Layout (64 bytes), matches `Light` in lit.wgsl.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct LightUniform {
    position: [f32; 4],
    diffuse: [f32; 4],
    specular: [f32; 4],
    flags: [f32; 4],
}

impl From<&PointLight> for LightUniform {
    fn from(light: &PointLight) -> Self {
        Self {
            position: light.position.to_array(),
            diffuse: light.diffuse.to_array(),
            specular: light.specular.to_array(),
            flags: [if light.enabled { 1.0 } else { 0.0 }, 0.0, 0.0, 0.0],
        }
    }
}

/// Layout (224 bytes), matches `Globals` in lit.wgsl.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GlobalsUniform {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    ambient: [f32; 4],
    lights: [LightUniform; MAX_LIGHTS],
}

impl GlobalsUniform {
    fn new(frame: &SceneFrame, aspect: f32) -> Self {
        let LightRig { ambient, lights } = &frame.lights;
        Self {
            view_proj: frame.camera.view_projection(aspect).to_cols_array_2d(),
            eye: frame.camera.eye.extend(1.0).to_array(),
            ambient: ambient.to_array(),
            lights: lights.each_ref().map(LightUniform::from),
        }
    }
}

/// Layout (160 bytes), matches `Object` in lit.wgsl.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ObjectUniform {
    model: [[f32; 4]; 4],
    normal: [[f32; 4]; 4],
    specular: [f32; 4],
    params: [f32; 4],
}

impl ObjectUniform {
    fn new(draw: &MeshDraw) -> Self {
        let normal = draw.model.inverse().transpose();
        let s = draw.material.specular;
        Self {
            model: draw.model.to_cols_array_2d(),
            normal: normal.to_cols_array_2d(),
            specular: [s.r, s.g, s.b, draw.material.clamped_shininess()],
            params: [draw.alpha.clamp(0.0, 1.0), 0.0, 0.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{Mat4, Vec3};

    use super::*;
    use crate::paint::Color;
    use crate::render::{Camera, Material};

    fn frame(lights: LightRig) -> SceneFrame {
        let camera = Camera::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        SceneFrame::new(Color::BLACK, camera, lights)
    }

    #[test]
    fn uniform_sizes_match_shader_layout() {
        assert_eq!(std::mem::size_of::<LightUniform>(), 64);
        assert_eq!(std::mem::size_of::<GlobalsUniform>(), 224);
        assert_eq!(std::mem::size_of::<ObjectUniform>(), 160);
    }

    #[test]
    fn object_stride_respects_alignment() {
        assert_eq!(object_stride(256), 256);
        assert_eq!(object_stride(64), 192);
        assert_eq!(object_stride(0), 160);
    }

    #[test]
    fn disabled_light_is_flagged_off() {
        let rig = LightRig::new(Color::gray(0.2))
            .with_light(0, PointLight::at(Vec3::ONE, Color::WHITE).with_enabled(false))
            .with_light(1, PointLight::at(Vec3::new(-1.0, 1.0, -1.0), Color::WHITE));
        let globals = GlobalsUniform::new(&frame(rig), 4.0 / 3.0);

        assert_eq!(globals.lights[0].flags[0], 0.0);
        assert_eq!(globals.lights[1].flags[0], 1.0);
        assert_eq!(globals.lights[1].position, [-1.0, 1.0, -1.0, 1.0]);
        assert_eq!(globals.ambient, [0.2, 0.2, 0.2, 1.0]);
        assert_eq!(globals.eye, [0.0, 0.0, 5.0, 1.0]);
    }

    #[test]
    fn object_uniform_carries_material_and_alpha() {
        let draw = MeshDraw::new(MeshId(0))
            .with_model(Mat4::from_translation(Vec3::new(2.0, 0.0, 0.0)))
            .with_material(Material::new(Color::WHITE, 50.0))
            .with_alpha(0.5);
        let object = ObjectUniform::new(&draw);

        assert_eq!(object.specular, [1.0, 1.0, 1.0, 50.0]);
        assert_eq!(object.params[0], 0.5);
        assert_eq!(object.model[3], [2.0, 0.0, 0.0, 1.0]);
        // Translation leaves normals untouched.
        assert_eq!(Mat4::from_cols_array_2d(&object.normal).transform_vector3(Vec3::Y), Vec3::Y);
    }
}
