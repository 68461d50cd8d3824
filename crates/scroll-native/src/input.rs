//! Desktop stand-ins for page scrolling and the color picker.

use scroll_core::{Rgb, SceneEvent};
use winit::event::MouseScrollDelta;

/// Logical pixels scrolled per wheel notch.
pub const LINE_SCROLL_PX: f32 = 60.0;

/// Tints bound to keys `1`..`4`.
pub const PRESET_TINTS: [&str; 4] = ["#ffeded", "#938379", "#e3f075", "#9ad0ec"];

/// Scroll offset of a page that is one viewport tall per scene object.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VirtualScroll {
    offset: f32,
}

impl VirtualScroll {
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(viewport_height: f32, sections: usize) -> f32 {
        sections.saturating_sub(1) as f32 * viewport_height.max(0.0)
    }

    /// Move by `delta_px` (positive scrolls down the page) and return the
    /// clamped offset.
    pub fn scroll_by(&mut self, delta_px: f32, viewport_height: f32, sections: usize) -> f32 {
        if delta_px.is_finite() {
            self.offset += delta_px;
        }
        self.clamp(viewport_height, sections)
    }

    /// Re-clamp after the viewport changed size.
    pub fn clamp(&mut self, viewport_height: f32, sections: usize) -> f32 {
        self.offset = self
            .offset
            .clamp(0.0, Self::max_offset(viewport_height, sections));
        self.offset
    }
}

/// Wheel delta in logical pixels, positive when scrolling down the page.
pub fn wheel_delta_px(delta: MouseScrollDelta, scale_factor: f64) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * LINE_SCROLL_PX,
        MouseScrollDelta::PixelDelta(pos) => {
            let sf = if scale_factor > 0.0 { scale_factor } else { 1.0 };
            (-pos.y / sf) as f32
        }
    }
}

pub fn preset_for_key(key: &str) -> Option<Rgb> {
    let idx = match key {
        "1" => 0,
        "2" => 1,
        "3" => 2,
        "4" => 3,
        _ => return None,
    };
    PRESET_TINTS[idx].parse().ok()
}

#[inline]
pub fn preset_event_for_key(key: &str) -> Option<SceneEvent> {
    preset_for_key(key).map(SceneEvent::ColorChanged)
}

/// Material color from the first CLI argument; a malformed value is logged
/// and the default kept.
pub fn color_from_arg(arg: Option<&str>) -> Option<Rgb> {
    let arg = arg?;
    match arg.parse::<Rgb>() {
        Ok(c) => Some(c),
        Err(e) => {
            log::warn!("[native] ignoring color argument {:?}: {}", arg, e);
            None
        }
    }
}
