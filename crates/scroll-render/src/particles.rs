use super::helpers;
use scroll_core::SceneState;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ParticleGlobals {
    pub(crate) view: [[f32; 4]; 4],
    pub(crate) proj: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) resolution: [f32; 2],
    pub(crate) size: f32,
    pub(crate) min_px: f32,
}

// Points never shrink below one physical pixel.
const MIN_POINT_PX: f32 = 1.0;

pub(crate) struct ParticleResources {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    instance_count: u32,
}

pub(crate) fn create_particle_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    scene: &SceneState,
) -> ParticleResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("particles_shader"),
        source: wgpu::ShaderSource::Wgsl(scroll_core::PARTICLES_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("particles_bgl"),
        entries: &[helpers::uniform_layout_entry(
            0,
            wgpu::ShaderStages::VERTEX_FRAGMENT,
        )],
    });
    let uniform_buffer = helpers::create_uniform_buffer::<ParticleGlobals>(device, "particles_u");
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("particles_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("particles_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });

    // Two triangles spanning [-0.5, 0.5]
    let quad_vertices: [f32; 12] = [
        -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
    ];
    let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("particles_quad_vb"),
        contents: bytemuck::cast_slice(&quad_vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let centers = scene.particles.as_floats();
    // Zero-sized buffers are invalid; keep one dummy slot and draw no instances.
    let instance_bytes: &[u8] = if centers.is_empty() {
        &[0u8; 12]
    } else {
        bytemuck::cast_slice(&centers)
    };
    let instance_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("particles_instance_vb"),
        contents: instance_bytes,
        usage: wgpu::BufferUsages::VERTEX,
    });

    let buffers = [
        wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 2) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            }],
        },
        wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 3) as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 1,
            }],
        },
    ];
    let pipeline = helpers::make_scene_pipeline(
        device,
        "particles_pipeline",
        &layout,
        &shader,
        &buffers,
        color_format,
        None,
    );

    ParticleResources {
        pipeline,
        uniform_buffer,
        bind_group,
        quad_vb,
        instance_vb,
        instance_count: centers.len() as u32,
    }
}

impl ParticleResources {
    pub(crate) fn write_uniforms(
        &self,
        queue: &wgpu::Queue,
        scene: &SceneState,
        width: u32,
        height: u32,
    ) {
        let [r, g, b] = scene.material_color.to_linear();
        let u = ParticleGlobals {
            view: scene.rig.view_matrix().to_cols_array_2d(),
            proj: scene.rig.projection_matrix().to_cols_array_2d(),
            color: [r, g, b, 1.0],
            resolution: [width.max(1) as f32, height.max(1) as f32],
            size: scene.config.particle_size,
            min_px: MIN_POINT_PX,
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.instance_count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
        rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
        rpass.draw(0..6, 0..self.instance_count);
    }
}
