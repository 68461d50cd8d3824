//! wgpu renderer for the scroll scene: toon-shaded meshes plus the particle
//! field, drawn in a single depth-tested pass straight into the surface.

use scroll_core::{Rgb, SceneState, PAGE_BACKGROUND};

mod helpers;
mod particles;
mod targets;
mod toon;

use particles::{create_particle_resources, ParticleResources};
use targets::RenderTargets;
use toon::{create_toon_resources, ToonResources};

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    // sRGB view of the surface; pipelines target this format
    view_format: wgpu::TextureFormat,
    targets: RenderTargets,
    toon: ToonResources,
    particles: ParticleResources,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    /// Set up the device and every scene resource for `surface`.
    ///
    /// `width`/`height` are the backing-store size in physical pixels.
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'a>,
        width: u32,
        height: u32,
        scene: &SceneState,
    ) -> anyhow::Result<Self> {
        let width = width.max(1);
        let height = height.max(1);
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("Surface reports no formats"))?;
        let view_format = format.add_srgb_suffix();
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: if view_format != format {
                vec![view_format]
            } else {
                vec![]
            },
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} {:?} (view {:?}) alpha {:?}",
            width,
            height,
            format,
            view_format,
            alpha_mode
        );

        let clear_color = clear_color_for(alpha_mode);
        let targets = RenderTargets::new(&device, width, height);
        let toon = create_toon_resources(&device, &queue, view_format, scene);
        let particles = create_particle_resources(&device, view_format, scene);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format,
            targets,
            toon,
            particles,
            width,
            height,
            clear_color,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    /// Reconfigure the surface at its current size, e.g. after `SurfaceError::Lost`.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, scene: &SceneState) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });

        self.toon.write_uniforms(&self.queue, scene);
        self.particles
            .write_uniforms(&self.queue, scene, self.width, self.height);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.toon.draw(&mut rpass);
            self.particles.draw(&mut rpass);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Transparent when the compositor blends us over the page, otherwise the
/// page background so native windows look the same.
fn clear_color_for(alpha_mode: wgpu::CompositeAlphaMode) -> wgpu::Color {
    match alpha_mode {
        wgpu::CompositeAlphaMode::PreMultiplied | wgpu::CompositeAlphaMode::PostMultiplied => {
            wgpu::Color::TRANSPARENT
        }
        _ => {
            let [r, g, b] = Rgb::from_hex(PAGE_BACKGROUND)
                .unwrap_or_default()
                .to_linear();
            wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premultiplied_surfaces_clear_to_transparent() {
        let c = clear_color_for(wgpu::CompositeAlphaMode::PreMultiplied);
        assert_eq!(c.a, 0.0);
    }

    #[test]
    fn opaque_surfaces_clear_to_page_background() {
        let c = clear_color_for(wgpu::CompositeAlphaMode::Opaque);
        assert_eq!(c.a, 1.0);
        // #1e1a20 is a dark, slightly purple grey
        assert!(c.r > 0.0 && c.r < 0.05);
        assert!(c.b > c.g);
    }
}
