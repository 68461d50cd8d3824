use crate::constants::CANVAS_SELECTOR;
use crate::input;
use scroll_core::{SceneEvent, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn find_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .query_selector(CANVAS_SELECTOR)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", CANVAS_SELECTOR))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// `(innerWidth, innerHeight, devicePixelRatio)`.
pub fn window_metrics(window: &web::Window) -> (f64, f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    (w, h, window.device_pixel_ratio())
}

#[inline]
pub fn viewport_event(window: &web::Window) -> SceneEvent {
    let (w, h, dpr) = window_metrics(window);
    input::resize_event(w, h, dpr)
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Size the canvas backing store to the viewport at the clamped pixel ratio.
/// Returns the physical size so the surface can follow.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) -> (u32, u32) {
    let (w_px, h_px) = viewport.backing_size();
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    (w_px, h_px)
}
