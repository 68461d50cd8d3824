pub mod camera;
pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod events;
pub mod geometry;
pub mod particles;
pub mod scene;
pub mod section;
pub mod state;
pub mod toon;

pub static TOON_WGSL: &str = include_str!("../shaders/toon.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

pub use camera::CameraRig;
pub use clock::FrameClock;
pub use color::Rgb;
pub use config::{LightConfig, SceneConfig};
pub use constants::*;
pub use error::SceneError;
pub use events::{normalized_pointer, EventQueue, SceneEvent};
pub use scene::{MeshKind, SceneObject};
pub use section::{section_for_scroll, SectionTracker};
pub use state::{clamp_pixel_ratio, SceneState, Viewport};
pub use toon::toon_ramp;
