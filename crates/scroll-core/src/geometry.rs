//! CPU-side mesh builders for the three scene primitives.
//!
//! All meshes are centered on the origin with counter-clockwise front faces.
//! The cube uses flat per-face normals; the torus and the cone sides use
//! smooth normals.

use crate::scene::MeshKind;
use glam::Vec3;
use std::f32::consts::TAU;

pub const TORUS_RADIAL_SEGMENTS: u32 = 12;
pub const TORUS_TUBULAR_SEGMENTS: u32 = 48;

/// Interleaved vertex layout shared with the toon shader.
///
/// | Attribute | Format    | Offset | Shader Location |
/// |-----------|-----------|--------|-----------------|
/// | position  | Float32x3 | 0      | 0               |
/// | normal    | Float32x3 | 12     | 1               |
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

pub fn build_mesh(kind: MeshKind) -> MeshData {
    match kind {
        MeshKind::Cube => cube(1.0),
        MeshKind::Torus => torus(1.0, 0.3, TORUS_RADIAL_SEGMENTS, TORUS_TUBULAR_SEGMENTS),
        MeshKind::Cone => cone(0.6, 1.0, 4),
    }
}

/// Axis-aligned cube with edge length `size`.
pub fn cube(size: f32) -> MeshData {
    let h = size * 0.5;
    // (normal, tangent u, tangent v) per face with u × v == normal
    let faces = [
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    ];
    let mut mesh = MeshData::default();
    for (n, u, v) in faces {
        let base = mesh.vertices.len() as u32;
        let center = n * h;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            mesh.vertices
                .push(Vertex::new(center + u * (su * h) + v * (sv * h), n));
        }
        mesh.indices
            .extend([base, base + 1, base + 2, base + 2, base + 3, base]);
    }
    mesh
}

/// Torus lying in the XY plane around the Z axis.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let radial = radial_segments.max(3);
    let tubular = tubular_segments.max(3);
    let mut mesh = MeshData::default();

    for j in 0..=radial {
        let v = j as f32 / radial as f32 * TAU;
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * TAU;
            let ring = radius + tube * v.cos();
            let p = Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin());
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.vertices
                .push(Vertex::new(p, (p - center).normalize_or_zero()));
        }
    }

    let row = tubular + 1;
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.indices.extend([a, b, d, b, c, d]);
        }
    }
    mesh
}

/// Capped cone with its apex on +Y. With few segments this is a pyramid.
///
/// The sides share one ring of rim vertices with smooth normals tilted up
/// by the slope, so the toon ramp blends around the cone instead of banding
/// per face. The apex is duplicated per segment so each side keeps its own
/// normal there. The base cap is flat.
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let segments = radial_segments.max(3);
    let half = height * 0.5;
    let slope = if height > 0.0 { radius / height } else { 0.0 };
    let angle = |x: u32| x as f32 / segments as f32 * TAU;
    let mut mesh = MeshData::default();

    // sides: an apex row and a rim row, each closing the seam with a
    // repeated vertex at theta = TAU
    for (y, r) in [(half, 0.0), (-half, radius)] {
        for x in 0..=segments {
            let (sin, cos) = angle(x).sin_cos();
            let normal = Vec3::new(sin, slope, cos).normalize_or_zero();
            mesh.vertices
                .push(Vertex::new(Vec3::new(r * sin, y, r * cos), normal));
        }
    }
    let row = segments + 1;
    for x in 0..segments {
        let (apex, rim) = (x, row + x);
        mesh.indices.extend([rim, rim + 1, apex]);
    }

    // base cap: one center per segment, then its own rim ring
    let center_start = mesh.vertices.len() as u32;
    for _ in 0..segments {
        mesh.vertices
            .push(Vertex::new(Vec3::new(0.0, -half, 0.0), Vec3::NEG_Y));
    }
    let rim_start = mesh.vertices.len() as u32;
    for x in 0..=segments {
        let (sin, cos) = angle(x).sin_cos();
        mesh.vertices.push(Vertex::new(
            Vec3::new(radius * sin, -half, radius * cos),
            Vec3::NEG_Y,
        ));
    }
    for x in 0..segments {
        let (c, i) = (center_start + x, rim_start + x);
        mesh.indices.extend([i + 1, i, c]);
    }
    mesh
}
