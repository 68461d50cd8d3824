#![cfg(target_arch = "wasm32")]
use scroll_core::{EventQueue, FrameClock, SceneConfig, SceneState, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod panel;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("toon-scroll starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_canvas(&document)?;

    let config = SceneConfig::default();
    let (w, h, dpr) = dom::window_metrics(&window);
    let viewport = Viewport::new(w as f32, h as f32, dpr, config.max_pixel_ratio);
    // A reload may land mid-page; start there without spinning that section.
    let state = SceneState::new(config, viewport).with_initial_scroll(dom::scroll_y(&window));
    log::info!(
        "[scene] {} objects, {} particles, section {}",
        state.objects.len(),
        state.particles.len(),
        state.current_section()
    );

    let queue = Rc::new(RefCell::new(EventQueue::new()));
    events::wire_all(&window, &document, &queue);

    let gpu = frame::init_gpu(&canvas, &state).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        queue,
        clock: FrameClock::new(),
        canvas,
        gpu,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
