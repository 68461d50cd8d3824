use crate::config::SceneConfig;
use crate::constants::{PARTICLE_DEPTH_Z, PARTICLE_SPREAD_X};
use glam::Vec3;
use rand::prelude::*;

/// Static ambient particle field spanning every section.
#[derive(Clone, Debug, Default)]
pub struct Particles {
    pub positions: Vec<Vec3>,
}

impl Particles {
    /// Scatter `config.particle_count` points through the scrollable volume.
    ///
    /// x is centered on the page, y starts a little above the first mesh and
    /// reaches down past the last one, z sits between the meshes and camera.
    pub fn generate(config: &SceneConfig, object_count: usize) -> Self {
        let mut rng = match config.particle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::generate_with(&mut rng, config.particle_count, config.objects_distance, object_count)
    }

    pub fn generate_with<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        objects_distance: f32,
        object_count: usize,
    ) -> Self {
        let top = objects_distance / 5.0;
        let span = objects_distance * object_count as f32;
        let positions = (0..count)
            .map(|_| {
                let x = (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD_X;
                let y = top - rng.gen::<f32>() * span;
                let z = rng.gen::<f32>() * PARTICLE_DEPTH_Z;
                Vec3::new(x, y, z)
            })
            .collect();
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Packed xyz floats for a vertex/instance buffer.
    pub fn as_floats(&self) -> Vec<[f32; 3]> {
        self.positions.iter().map(|p| p.to_array()).collect()
    }
}
