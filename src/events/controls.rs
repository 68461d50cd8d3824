use super::SharedQueue;
use crate::constants::COLOR_INPUT_ID;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Forward `input` events from the color picker. A page without the picker
/// simply keeps the default color.
pub(super) fn wire_color_input(document: &web::Document, queue: SharedQueue) {
    let Some(el) = document.get_element_by_id(COLOR_INPUT_ID) else {
        log::info!("[controls] no #{} on page", COLOR_INPUT_ID);
        return;
    };
    let Ok(picker) = el.dyn_into::<web::HtmlInputElement>() else {
        log::warn!("[controls] #{} is not an <input>", COLOR_INPUT_ID);
        return;
    };
    let picker_cb = picker.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(ev) = input::color_event_from_input(&picker_cb.value()) {
            queue.borrow_mut().push(ev);
        }
    }) as Box<dyn FnMut()>);
    _ = picker.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}
