use scroll_core::{EventQueue, FrameClock, SceneConfig, SceneEvent, SceneState, Viewport};
use scroll_render::GpuState;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowBuilder};

mod input;

use input::VirtualScroll;

fn resize_event(size: PhysicalSize<u32>, scale_factor: f64) -> SceneEvent {
    let logical = size.to_logical::<f32>(scale_factor);
    SceneEvent::Resized {
        width: logical.width,
        height: logical.height,
        device_pixel_ratio: scale_factor,
    }
}

/// Everything the event loop owns besides the window itself.
struct NativeApp<'w> {
    window: &'w Window,
    gpu: GpuState<'w>,
    state: SceneState,
    queue: EventQueue,
    clock: FrameClock,
    scroll: VirtualScroll,
}

impl<'w> NativeApp<'w> {
    async fn new(window: &'w Window, config: SceneConfig) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let scale = window.scale_factor();
        let logical = size.to_logical::<f32>(scale);
        let viewport = Viewport::new(logical.width, logical.height, scale, config.max_pixel_ratio);
        let state = SceneState::new(config, viewport);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        // The compositor expects the window's own physical size here.
        let gpu = GpuState::new(&instance, surface, size.width, size.height, &state).await?;
        log::info!(
            "[native] {}x{} @{:.2}, {} particles",
            size.width,
            size.height,
            scale,
            state.particles.len()
        );
        Ok(Self {
            window,
            gpu,
            state,
            queue: EventQueue::new(),
            clock: FrameClock::new(),
            scroll: VirtualScroll::default(),
        })
    }

    fn sections(&self) -> usize {
        self.state.objects.len()
    }

    fn on_resize(&mut self, size: PhysicalSize<u32>) {
        // Minimized windows report 0x0; keep the last layout.
        if size.width == 0 || size.height == 0 {
            return;
        }
        self.gpu.resize_if_needed(size.width, size.height);
        let scale = self.window.scale_factor();
        let height = size.to_logical::<f32>(scale).height;
        let sections = self.sections();
        let before = self.scroll.offset();
        let after = self.scroll.clamp(height, sections);
        self.queue.push(resize_event(size, scale));
        if after != before {
            self.queue.push(SceneEvent::Scrolled { scroll_y: after });
        }
    }

    fn on_wheel(&mut self, delta_px: f32) {
        let sections = self.sections();
        let scroll_y = self
            .scroll
            .scroll_by(delta_px, self.state.viewport.height, sections);
        self.queue.push(SceneEvent::Scrolled { scroll_y });
    }

    /// Returns `false` when the loop should stop.
    fn frame(&mut self) -> bool {
        let (_, dt_sec) = self.clock.tick();
        self.state.apply_all(&mut self.queue);
        self.state.step(dt_sec);
        match self.gpu.render(&self.state) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.on_resize(self.window.inner_size());
                self.gpu.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[native] out of GPU memory");
                return false;
            }
            Err(e) => log::warn!("[native] render error: {:?}", e),
        }
        self.window.request_redraw();
        true
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut config = SceneConfig::default();
    if let Some(color) = input::color_from_arg(std::env::args().nth(1).as_deref()) {
        config.material_color = color;
    }

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("toon-scroll (native)")
        .with_inner_size(LogicalSize::new(1280.0, 800.0))
        .build(&event_loop)?;

    let mut app = pollster::block_on(NativeApp::new(&window, config))?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => app.on_resize(size),
            WindowEvent::ScaleFactorChanged { .. } => app.on_resize(app.window.inner_size()),
            WindowEvent::CursorMoved { position, .. } => {
                let p = position.to_logical::<f32>(app.window.scale_factor());
                app.queue.push(SceneEvent::PointerMoved {
                    client_x: p.x,
                    client_y: p.y,
                });
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let px = input::wheel_delta_px(delta, app.window.scale_factor());
                app.on_wheel(px);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match logical_key {
                Key::Named(NamedKey::Escape) => elwt.exit(),
                Key::Character(ch) => {
                    if let Some(ev) = input::preset_event_for_key(ch.as_str()) {
                        app.queue.push(ev);
                    }
                }
                _ => {}
            },
            _ => {}
        },
        Event::AboutToWait => {
            if !app.frame() {
                elwt.exit();
            }
        }
        _ => {}
    })?;
    Ok(())
}
