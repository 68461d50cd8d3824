use super::SharedQueue;
use scroll_core::SceneEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub(super) fn wire_mousemove(window: &web::Window, queue: SharedQueue) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        queue.borrow_mut().push(SceneEvent::PointerMoved {
            client_x: ev.client_x() as f32,
            client_y: ev.client_y() as f32,
        });
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}
