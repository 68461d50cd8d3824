use crate::config::SceneConfig;
use crate::easing::Tween;
use glam::{EulerRot, Mat4, Quat, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshKind {
    Cube,
    Torus,
    Cone,
}

impl MeshKind {
    /// Page order, top to bottom.
    pub const ALL: [MeshKind; 3] = [MeshKind::Cube, MeshKind::Torus, MeshKind::Cone];
}

/// One of the tracked meshes: placement plus accumulated rotation.
#[derive(Clone, Debug)]
pub struct SceneObject {
    pub kind: MeshKind,
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
    spins: SmallVec<[Tween; 2]>,
}

impl SceneObject {
    pub fn new(kind: MeshKind, position: Vec3) -> Self {
        Self {
            kind,
            position,
            rotation: Vec3::ZERO,
            spins: SmallVec::new(),
        }
    }

    /// Queue a relative rotation animation. Overlapping spins stack.
    pub fn start_spin(&mut self, delta: Vec3, duration_sec: f32) {
        self.spins.push(Tween::new(delta, duration_sec));
    }

    pub fn is_spinning(&self) -> bool {
        !self.spins.is_empty()
    }

    pub fn active_spins(&self) -> usize {
        self.spins.len()
    }

    /// Continuous spin plus whatever the in-flight section spins add this frame.
    pub fn advance(&mut self, spin_rate: Vec3, dt_sec: f32) {
        self.rotation += spin_rate * dt_sec;
        for spin in &mut self.spins {
            self.rotation += spin.advance(dt_sec);
        }
        self.spins.retain(|s| !s.is_finished());
    }

    pub fn model_matrix(&self) -> Mat4 {
        let r = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_rotation_translation(r, self.position)
    }
}

/// Lay out one mesh per section, stepping down by the section spacing and
/// alternating sides of the page.
pub fn build_objects(config: &SceneConfig) -> Vec<SceneObject> {
    MeshKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let x = config.object_x_offsets[i % config.object_x_offsets.len()];
            let y = -config.objects_distance * i as f32;
            SceneObject::new(*kind, Vec3::new(x, y, 0.0))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_page_order() {
        let objs = build_objects(&SceneConfig::default());
        assert_eq!(objs.len(), 3);
        assert_eq!(objs[0].kind, MeshKind::Cube);
        assert_eq!(objs[1].position, Vec3::new(-1.5, -4.0, 0.0));
        assert_eq!(objs[2].position, Vec3::new(1.5, -8.0, 0.0));
    }

    #[test]
    fn finished_spins_are_dropped() {
        let mut o = SceneObject::new(MeshKind::Cube, Vec3::ZERO);
        o.start_spin(Vec3::new(6.0, 3.0, 0.0), 0.5);
        o.start_spin(Vec3::new(6.0, 3.0, 0.0), 1.0);
        assert_eq!(o.active_spins(), 2);
        o.advance(Vec3::ZERO, 0.6);
        assert_eq!(o.active_spins(), 1);
        o.advance(Vec3::ZERO, 0.6);
        assert!(!o.is_spinning());
        assert!((o.rotation - Vec3::new(12.0, 6.0, 0.0)).length() < 1e-4);
    }
}
