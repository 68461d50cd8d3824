use crate::constants::TOGGLE_CONTROLS_KEY;
use scroll_core::{Rgb, SceneEvent};

#[inline]
pub fn is_toggle_controls_key(key: &str) -> bool {
    key.eq_ignore_ascii_case(TOGGLE_CONTROLS_KEY)
}

/// Turn the value of the color input into a scene event. Malformed values are
/// logged and dropped so the material keeps its last good color.
pub fn color_event_from_input(value: &str) -> Option<SceneEvent> {
    match value.trim().parse::<Rgb>() {
        Ok(color) => Some(SceneEvent::ColorChanged(color)),
        Err(e) => {
            log::warn!("[controls] ignoring color {:?}: {}", value, e);
            None
        }
    }
}

/// Browser viewport snapshot as a resize event.
#[inline]
pub fn resize_event(inner_width: f64, inner_height: f64, device_pixel_ratio: f64) -> SceneEvent {
    SceneEvent::Resized {
        width: inner_width as f32,
        height: inner_height as f32,
        device_pixel_ratio,
    }
}
