//! Scene state and the per-frame update.
//!
//! Everything here is platform-free. Front-ends translate DOM or window
//! events into [`SceneEvent`]s, drain them into [`SceneState::apply`] once
//! per frame, call [`SceneState::step`] with the frame delta and hand the
//! state to the renderer.

use crate::camera::CameraRig;
use crate::color::Rgb;
use crate::config::SceneConfig;
use crate::events::{normalized_pointer, EventQueue, SceneEvent};
use crate::particles::Particles;
use crate::scene::{build_objects, SceneObject};
use crate::section::SectionTracker;
use glam::Vec2;

/// Logical viewport size plus the clamped pixel ratio used for the backing store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f64, max_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            pixel_ratio: clamp_pixel_ratio(device_pixel_ratio, max_pixel_ratio),
        }
    }

    /// Backing-store size in physical pixels, never zero.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width as f64 * self.pixel_ratio).floor() as u32;
        let h = (self.height as f64 * self.pixel_ratio).floor() as u32;
        (w.max(1), h.max(1))
    }
}

/// `min(dpr, max)`, treating non-finite or non-positive ratios as 1.
#[inline]
pub fn clamp_pixel_ratio(device_pixel_ratio: f64, max_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(max_pixel_ratio)
    } else {
        1.0
    }
}

pub struct SceneState {
    pub config: SceneConfig,
    pub viewport: Viewport,
    pub scroll_y: f32,
    /// Normalized pointer offset, \[-0.5, 0.5\] per axis.
    pub pointer: Vec2,
    pub sections: SectionTracker,
    pub objects: Vec<SceneObject>,
    pub rig: CameraRig,
    pub particles: Particles,
    pub material_color: Rgb,
    pub elapsed_sec: f64,
}

impl SceneState {
    pub fn new(config: SceneConfig, viewport: Viewport) -> Self {
        let objects = build_objects(&config);
        let particles = Particles::generate(&config, objects.len());
        let mut rig = CameraRig::new(
            config.camera_fov_y_deg,
            1.0,
            config.camera_near,
            config.camera_far,
            config.camera_z,
        );
        rig.set_aspect(viewport.width, viewport.height);
        let material_color = config.material_color;
        Self {
            config,
            viewport,
            scroll_y: 0.0,
            pointer: Vec2::ZERO,
            sections: SectionTracker::default(),
            objects,
            rig,
            particles,
            material_color,
            elapsed_sec: 0.0,
        }
    }

    /// Start from an already-scrolled page without animating the section
    /// the page loaded on.
    pub fn with_initial_scroll(mut self, scroll_y: f32) -> Self {
        self.scroll_y = scroll_y;
        self.sections.update(scroll_y, self.viewport.height);
        self.rig.camera_y =
            CameraRig::scroll_to_camera_y(scroll_y, self.viewport.height, self.config.objects_distance);
        self
    }

    pub fn current_section(&self) -> usize {
        self.sections.current()
    }

    pub fn apply(&mut self, ev: SceneEvent) {
        match ev {
            SceneEvent::PointerMoved { client_x, client_y } => {
                self.pointer = normalized_pointer(
                    client_x,
                    client_y,
                    self.viewport.width,
                    self.viewport.height,
                );
            }
            SceneEvent::Scrolled { scroll_y } => {
                self.scroll_y = scroll_y;
                if let Some(section) = self.sections.update(scroll_y, self.viewport.height) {
                    self.trigger_section(section);
                }
            }
            SceneEvent::Resized {
                width,
                height,
                device_pixel_ratio,
            } => {
                self.viewport =
                    Viewport::new(width, height, device_pixel_ratio, self.config.max_pixel_ratio);
                self.rig.set_aspect(width, height);
            }
            SceneEvent::ColorChanged(color) => {
                log::info!("[scene] material color {}", color);
                self.material_color = color;
            }
        }
    }

    /// Apply every queued event in arrival order.
    pub fn apply_all(&mut self, queue: &mut EventQueue) {
        for ev in queue.drain() {
            self.apply(ev);
        }
    }

    /// Spin the mesh that belongs to `section`. Sections past the last mesh
    /// (a page taller than the scene) have nothing to animate.
    fn trigger_section(&mut self, section: usize) {
        let delta = self.config.section_spin_delta;
        let duration = self.config.section_spin_duration_sec;
        match self.objects.get_mut(section) {
            Some(obj) => {
                log::debug!("[scene] section {} -> spin {:?}", section, obj.kind);
                obj.start_spin(delta, duration);
            }
            None => {
                log::debug!(
                    "[scene] section {} has no mesh ({} tracked)",
                    section,
                    self.objects.len()
                );
            }
        }
    }

    /// Advance the scene by `dt_sec`. A zero delta leaves every
    /// time-driven field untouched.
    pub fn step(&mut self, dt_sec: f32) {
        let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        self.elapsed_sec += dt as f64;

        self.rig.camera_y = CameraRig::scroll_to_camera_y(
            self.scroll_y,
            self.viewport.height,
            self.config.objects_distance,
        );

        let target = Vec2::new(self.pointer.x, -self.pointer.y);
        self.rig
            .step_parallax(target, self.config.parallax_smoothing, dt);

        let spin_rate = self.config.spin_rate;
        for obj in &mut self.objects {
            obj.advance(spin_rate, dt);
        }
    }
}
