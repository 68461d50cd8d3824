use crate::dom;
use crate::input;
use crate::panel;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub(super) fn wire_toggle_controls(window: &web::Window) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.repeat() || !input::is_toggle_controls_key(&ev.key()) {
            return;
        }
        if let Some(document) = dom::window_document() {
            panel::toggle(&document);
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
