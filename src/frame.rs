use crate::dom;
use crate::events::SharedQueue;
use scroll_core::{FrameClock, SceneState};
use scroll_render::GpuState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: SceneState,
    pub queue: SharedQueue,
    pub clock: FrameClock,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<GpuState<'static>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let (_, dt_sec) = self.clock.tick();

        // Handlers only enqueue; everything lands before the step reads state.
        self.state.apply_all(&mut self.queue.borrow_mut());
        self.state.step(dt_sec);

        let (w_px, h_px) = dom::sync_canvas_backing_size(&self.canvas, &self.state.viewport);
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        gpu.resize_if_needed(w_px, h_px);
        match gpu.render(&self.state) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::error!("[frame] render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    state: &SceneState,
) -> Option<GpuState<'static>> {
    let instance = wgpu::Instance::default();
    let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
        Ok(s) => s,
        Err(e) => {
            log::error!("[gpu] create_surface failed: {:?}", e);
            return None;
        }
    };
    let (w, h) = dom::sync_canvas_backing_size(canvas, &state.viewport);
    match GpuState::new(&instance, surface, w, h, state).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] init failed: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
