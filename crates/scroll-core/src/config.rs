use crate::color::Rgb;
use crate::constants::*;
use glam::Vec3;

/// Tunables for a scene. `Default` reproduces the stock page.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub objects_distance: f32,
    pub object_x_offsets: [f32; 3],
    pub parallax_smoothing: f32,
    pub spin_rate: Vec3,
    pub section_spin_delta: Vec3,
    pub section_spin_duration_sec: f32,
    pub particle_count: usize,
    /// Fixed seed for the particle field; `None` seeds from entropy.
    pub particle_seed: Option<u64>,
    pub particle_size: f32,
    pub camera_fov_y_deg: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    pub camera_z: f32,
    pub max_pixel_ratio: f64,
    pub material_color: Rgb,
    pub light: LightConfig,
}

#[derive(Clone, Debug)]
pub struct LightConfig {
    pub color: Rgb,
    pub intensity: f32,
    /// Position of a directional light; it shines toward the origin.
    pub position: Vec3,
}

impl LightConfig {
    /// Unit vector pointing from the surface toward the light.
    pub fn direction_to_light(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            color: Rgb::from_hex(LIGHT_COLOR).unwrap_or_default(),
            intensity: LIGHT_INTENSITY,
            position: light_position_vec3(),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            objects_distance: OBJECTS_DISTANCE,
            object_x_offsets: OBJECT_X_OFFSETS,
            parallax_smoothing: PARALLAX_SMOOTHING,
            spin_rate: Vec3::new(SPIN_RATE_X, SPIN_RATE_Y, 0.0),
            section_spin_delta: section_spin_delta_vec3(),
            section_spin_duration_sec: SECTION_SPIN_DURATION_SEC,
            particle_count: PARTICLE_COUNT,
            particle_seed: None,
            particle_size: PARTICLE_SIZE,
            camera_fov_y_deg: CAMERA_FOV_Y_DEG,
            camera_near: CAMERA_NEAR,
            camera_far: CAMERA_FAR,
            camera_z: CAMERA_Z,
            max_pixel_ratio: MAX_PIXEL_RATIO,
            material_color: Rgb::from_hex(DEFAULT_MATERIAL_COLOR).unwrap_or_default(),
            light: LightConfig::default(),
        }
    }
}
