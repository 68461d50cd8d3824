use crate::color::Rgb;
use glam::Vec2;
use std::collections::VecDeque;

/// Input captured by a front-end's event handlers.
///
/// Handlers only enqueue; the frame drains the queue before stepping the
/// scene, so every handler has completed before the update reads state.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneEvent {
    /// Cursor position in viewport (CSS / logical) pixels.
    PointerMoved { client_x: f32, client_y: f32 },
    /// Vertical document scroll offset in viewport pixels.
    Scrolled { scroll_y: f32 },
    /// New viewport size in logical pixels and the device pixel ratio.
    Resized {
        width: f32,
        height: f32,
        device_pixel_ratio: f64,
    },
    /// Material tint picked on the control surface.
    ColorChanged(Rgb),
}

/// Map a cursor position to a pointer offset in \[-0.5, 0.5\] per axis.
///
/// The y axis keeps the screen orientation (down is positive); the parallax
/// step flips it.
#[inline]
pub fn normalized_pointer(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(client_x / width - 0.5, client_y / height - 0.5)
}

#[derive(Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<SceneEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ev: SceneEvent) {
        self.pending.push_back(ev);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every pending event in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = SceneEvent> + '_ {
        self.pending.drain(..)
    }
}
