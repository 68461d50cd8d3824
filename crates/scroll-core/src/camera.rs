//! Camera rig: a parallax group carrying a perspective camera.
//!
//! The group follows the pointer with exponential smoothing while the camera
//! inside it tracks the scroll position vertically. The renderer only needs
//! the composed view and projection matrices.

use glam::{Mat4, Vec2, Vec3};

/// Right-handed perspective camera parented to a parallax group.
#[derive(Clone, Debug)]
pub struct CameraRig {
    /// Parallax offset of the group (x, y) in world units.
    pub group: Vec2,
    /// Camera height inside the group, driven by scroll.
    pub camera_y: f32,
    pub camera_z: f32,
    pub fovy_radians: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl CameraRig {
    pub fn new(fovy_degrees: f32, aspect: f32, znear: f32, zfar: f32, camera_z: f32) -> Self {
        Self {
            group: Vec2::ZERO,
            camera_y: 0.0,
            camera_z,
            fovy_radians: fovy_degrees.to_radians(),
            aspect,
            znear,
            zfar,
        }
    }

    /// World-space camera position (group offset plus local camera offset).
    pub fn eye(&self) -> Vec3 {
        Vec3::new(self.group.x, self.group.y + self.camera_y, self.camera_z)
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect.max(1e-4), self.znear, self.zfar)
    }

    /// The camera looks straight down -Z; neither group nor camera rotate.
    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.eye();
        Mat4::look_at_rh(eye, eye - Vec3::Z, Vec3::Y)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Camera height for a scroll offset: one viewport of scroll moves the
    /// camera down by one section spacing.
    pub fn scroll_to_camera_y(scroll_y: f32, viewport_height: f32, spacing: f32) -> f32 {
        if viewport_height <= 0.0 {
            return 0.0;
        }
        -(scroll_y / viewport_height) * spacing
    }

    /// Exponential approach of the parallax group toward `target`.
    ///
    /// `position += (target - position) * smoothing * dt` per axis. The
    /// delta-time factor keeps the approach framerate-independent.
    pub fn step_parallax(&mut self, target: Vec2, smoothing: f32, dt_sec: f32) {
        self.group += (target - self.group) * smoothing * dt_sec;
    }
}
