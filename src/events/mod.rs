//! DOM listeners. Each handler only enqueues a [`SceneEvent`]; the frame loop
//! drains the queue before stepping the scene.

use scroll_core::EventQueue;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

mod controls;
mod keyboard;
mod pointer;
mod viewport;

pub type SharedQueue = Rc<RefCell<EventQueue>>;

pub fn wire_all(window: &web::Window, document: &web::Document, queue: &SharedQueue) {
    pointer::wire_mousemove(window, queue.clone());
    viewport::wire_scroll(window, queue.clone());
    viewport::wire_resize(window, queue.clone());
    controls::wire_color_input(document, queue.clone());
    keyboard::wire_toggle_controls(window);
}
