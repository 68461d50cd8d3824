use glam::Vec3;

// Shared scene tuning constants used by both web and native frontends.

// Scene layout
pub const OBJECTS_DISTANCE: f32 = 4.0; // vertical spacing between sections in world units
pub const OBJECT_X_OFFSETS: [f32; 3] = [1.5, -1.5, 1.5]; // meshes alternate sides of the page

// Motion
pub const PARALLAX_SMOOTHING: f32 = 3.0; // exponential approach rate per second
pub const SPIN_RATE_X: f32 = 0.2; // rad/s
pub const SPIN_RATE_Y: f32 = 0.1; // rad/s

// Section highlight animation
pub const SECTION_SPIN_DELTA: [f32; 3] = [6.0, 3.0, 0.0]; // radians added per crossing
pub const SECTION_SPIN_DURATION_SEC: f32 = 1.5;

// Particle field
pub const PARTICLE_COUNT: usize = 5000;
pub const PARTICLE_SPREAD_X: f32 = 10.0;
pub const PARTICLE_DEPTH_Z: f32 = 10.0;
pub const PARTICLE_SIZE: f32 = 0.01; // world-space billboard size

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 35.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_Z: f32 = 6.0;

// Output
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const PAGE_BACKGROUND: &str = "#1e1a20"; // native clear color; on the web the page shows through

// Materials and lighting
pub const DEFAULT_MATERIAL_COLOR: &str = "#ffeded";
pub const LIGHT_COLOR: &str = "#e3f075";
pub const LIGHT_INTENSITY: f32 = 2.0;
pub const LIGHT_POSITION: [f32; 3] = [1.0, 0.5, 2.0];
pub const TOON_GRADIENT_STEPS: usize = 3;

#[inline]
pub fn light_position_vec3() -> Vec3 {
    Vec3::new(LIGHT_POSITION[0], LIGHT_POSITION[1], LIGHT_POSITION[2])
}

#[inline]
pub fn section_spin_delta_vec3() -> Vec3 {
    Vec3::new(
        SECTION_SPIN_DELTA[0],
        SECTION_SPIN_DELTA[1],
        SECTION_SPIN_DELTA[2],
    )
}
