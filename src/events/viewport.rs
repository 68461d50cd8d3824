use super::SharedQueue;
use crate::dom;
use scroll_core::SceneEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub(super) fn wire_scroll(window: &web::Window, queue: SharedQueue) {
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        queue.borrow_mut().push(SceneEvent::Scrolled {
            scroll_y: dom::scroll_y(&win),
        });
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub(super) fn wire_resize(window: &web::Window, queue: SharedQueue) {
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        queue.borrow_mut().push(dom::viewport_event(&win));
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
