// Host-side tests for mesh builders and the particle field.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scroll_core::geometry::*;
use scroll_core::particles::Particles;
use scroll_core::{MeshKind, SceneConfig, OBJECTS_DISTANCE};

fn vec(a: [f32; 3]) -> Vec3 {
    Vec3::from_array(a)
}

fn assert_well_formed(mesh: &MeshData) {
    assert_eq!(mesh.indices.len() % 3, 0);
    assert!(mesh
        .indices
        .iter()
        .all(|&i| (i as usize) < mesh.vertices.len()));
    for v in &mesh.vertices {
        let n = vec(v.normal).length();
        assert!((n - 1.0).abs() < 1e-4, "normal not unit: {n}");
    }
}

/// Every triangle of a convex mesh around the origin faces away from it,
/// and its winding agrees with the stored normals.
fn assert_outward_ccw(mesh: &MeshData) {
    for tri in mesh.indices.chunks(3) {
        let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.vertices[i as usize]);
        let (pa, pb, pc) = (vec(a.position), vec(b.position), vec(c.position));
        let face = (pb - pa).cross(pc - pa);
        let centroid = (pa + pb + pc) / 3.0;
        assert!(face.dot(centroid) > 0.0, "inward triangle at {centroid:?}");
        assert!(face.dot(vec(a.normal)) > 0.0, "winding disagrees with normal");
    }
}

#[test]
fn cube_has_twelve_outward_triangles() {
    let mesh = build_mesh(MeshKind::Cube);
    assert_well_formed(&mesh);
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.triangle_count(), 12);
    assert_outward_ccw(&mesh);
    for v in &mesh.vertices {
        assert!(v.position.iter().all(|c| c.abs() == 0.5));
    }
}

#[test]
fn cone_is_a_capped_four_sided_pyramid() {
    let mesh = build_mesh(MeshKind::Cone);
    assert_well_formed(&mesh);
    assert_eq!(mesh.triangle_count(), 8);
    assert_outward_ccw(&mesh);
    let top = mesh
        .vertices
        .iter()
        .map(|v| v.position[1])
        .fold(f32::MIN, f32::max);
    let bottom = mesh
        .vertices
        .iter()
        .map(|v| v.position[1])
        .fold(f32::MAX, f32::min);
    assert!((top - 0.5).abs() < 1e-6 && (bottom + 0.5).abs() < 1e-6);
}

#[test]
fn cone_sides_are_smooth_shaded() {
    let mesh = cone(0.6, 1.0, 4);
    let expected_y = 0.6 / (1.0f32 + 0.36).sqrt();
    // side triangles come first: two rim vertices then the apex
    for tri in mesh.indices[..12].chunks(3) {
        for &i in tri {
            let n = vec(mesh.vertices[i as usize].normal);
            assert!((n.y - expected_y).abs() < 1e-4, "side normal {n:?}");
        }
    }
    // neighbouring sides meet on a shared rim vertex
    let sides = &mesh.indices[..12];
    for k in 0..3 {
        assert_eq!(sides[k * 3 + 1], sides[(k + 1) * 3]);
    }
    // rim normals point radially out through the vertex
    let rim = vec(mesh.vertices[sides[0] as usize].position);
    let n = vec(mesh.vertices[sides[0] as usize].normal);
    assert!(Vec3::new(rim.x, 0.0, rim.z).normalize().dot(Vec3::new(n.x, 0.0, n.z).normalize()) > 0.999);
    // the cap stays flat
    for tri in mesh.indices[12..].chunks(3) {
        for &i in tri {
            assert_eq!(mesh.vertices[i as usize].normal, [0.0, -1.0, 0.0]);
        }
    }
}

#[test]
fn torus_vertices_sit_on_the_tube() {
    let mesh = torus(1.0, 0.3, TORUS_RADIAL_SEGMENTS, TORUS_TUBULAR_SEGMENTS);
    assert_well_formed(&mesh);
    assert_eq!(
        mesh.triangle_count(),
        (TORUS_RADIAL_SEGMENTS * TORUS_TUBULAR_SEGMENTS * 2) as usize
    );
    for v in &mesh.vertices {
        let p = vec(v.position);
        let ring = Vec3::new(p.x, p.y, 0.0).normalize();
        let d = (p - ring).length();
        assert!((d - 0.3).abs() < 1e-4, "distance to ring {d}");
        // smooth normals point from the ring center out through the vertex
        assert!(vec(v.normal).dot(p - ring) > 0.0);
    }
}

#[test]
fn particles_fill_the_scroll_volume() {
    let mut rng = StdRng::seed_from_u64(7);
    let objects = 3;
    let field = Particles::generate_with(&mut rng, 5000, OBJECTS_DISTANCE, objects);
    assert_eq!(field.len(), 5000);
    let top = OBJECTS_DISTANCE / 5.0;
    let bottom = top - OBJECTS_DISTANCE * objects as f32;
    for p in &field.positions {
        assert!(p.x >= -5.0 && p.x < 5.0);
        assert!(p.y <= top && p.y > bottom);
        assert!(p.z >= 0.0 && p.z < 10.0);
    }
    // reaches every section, not just the first
    assert!(field.positions.iter().any(|p| p.y < -2.0 * OBJECTS_DISTANCE));
}

#[test]
fn seeded_particles_are_reproducible() {
    let config = SceneConfig {
        particle_seed: Some(99),
        particle_count: 32,
        ..SceneConfig::default()
    };
    let a = Particles::generate(&config, 3);
    let b = Particles::generate(&config, 3);
    assert_eq!(a.positions, b.positions);
    assert_eq!(a.as_floats().len(), 32);
}
