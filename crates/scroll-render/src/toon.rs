use super::helpers;
use scroll_core::geometry::{build_mesh, Vertex};
use scroll_core::{toon_ramp, SceneState, TOON_GRADIENT_STEPS};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ToonGlobals {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) light_dir: [f32; 4],
    pub(crate) light_color: [f32; 4],
    pub(crate) material_color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    pub(crate) model: [[f32; 4]; 4],
}

pub(crate) struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub(crate) struct ToonResources {
    pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    meshes: Vec<GpuMesh>,
}

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

/// Nearest-filtered ramp texture; replaces a loaded gradient image.
fn create_gradient_map(device: &wgpu::Device, queue: &wgpu::Queue) -> (wgpu::TextureView, wgpu::Sampler) {
    let ramp = toon_ramp(TOON_GRADIENT_STEPS);
    let tex = device.create_texture_with_data(
        queue,
        &wgpu::TextureDescriptor {
            label: Some("toon_gradient"),
            size: wgpu::Extent3d {
                width: ramp.len() as u32,
                height: 1,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        },
        wgpu::util::TextureDataOrder::LayerMajor,
        bytemuck::cast_slice(&ramp),
    );
    let view = tex.create_view(&wgpu::TextureViewDescriptor::default());
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("toon_gradient_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Nearest,
        min_filter: wgpu::FilterMode::Nearest,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });
    (view, sampler)
}

pub(crate) fn create_toon_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    color_format: wgpu::TextureFormat,
    scene: &SceneState,
) -> ToonResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("toon_shader"),
        source: wgpu::ShaderSource::Wgsl(scroll_core::TOON_WGSL.into()),
    });
    let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("toon_bgl0"),
        entries: &[
            helpers::uniform_layout_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("toon_bgl1"),
        entries: &[helpers::uniform_layout_entry(0, wgpu::ShaderStages::VERTEX)],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("toon_pl"),
        bind_group_layouts: &[&globals_bgl, &object_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_scene_pipeline(
        device,
        "toon_pipeline",
        &layout,
        &shader,
        &[wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &VERTEX_ATTRIBUTES,
        }],
        color_format,
        Some(wgpu::Face::Back),
    );

    let globals_buffer = helpers::create_uniform_buffer::<ToonGlobals>(device, "toon_globals");
    let (gradient_view, gradient_sampler) = create_gradient_map(device, queue);
    let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("toon_bg0"),
        layout: &globals_bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&gradient_view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(&gradient_sampler),
            },
        ],
    });

    let meshes = scene
        .objects
        .iter()
        .map(|obj| {
            let data = build_mesh(obj.kind);
            let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("toon_vb"),
                contents: bytemuck::cast_slice(&data.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
            let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("toon_ib"),
                contents: bytemuck::cast_slice(&data.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
            let uniform_buffer =
                helpers::create_uniform_buffer::<ObjectUniforms>(device, "toon_object");
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("toon_bg1"),
                layout: &object_bgl,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            });
            GpuMesh {
                vertex_buffer,
                index_buffer,
                index_count: data.indices.len() as u32,
                uniform_buffer,
                bind_group,
            }
        })
        .collect();

    ToonResources {
        pipeline,
        globals_buffer,
        globals_bind_group,
        meshes,
    }
}

impl ToonResources {
    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, scene: &SceneState) {
        let light = &scene.config.light;
        let [lr, lg, lb] = light.color.to_linear();
        let [mr, mg, mb] = scene.material_color.to_linear();
        let dir = light.direction_to_light();
        let globals = ToonGlobals {
            view_proj: scene.rig.view_proj().to_cols_array_2d(),
            light_dir: [dir.x, dir.y, dir.z, light.intensity],
            light_color: [lr, lg, lb, 1.0],
            material_color: [mr, mg, mb, 1.0],
        };
        queue.write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
        for (mesh, obj) in self.meshes.iter().zip(&scene.objects) {
            let u = ObjectUniforms {
                model: obj.model_matrix().to_cols_array_2d(),
            };
            queue.write_buffer(&mesh.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.globals_bind_group, &[]);
        for mesh in &self.meshes {
            rpass.set_bind_group(1, &mesh.bind_group, &[]);
            rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }
}
