use glam::Vec3;

use crate::types::{LineVertex, MeshVertex};

/// Indexed triangle list ready for upload
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    /// Append a quad centered at `center` spanning `u` and `v` (half extents).
    /// Winding is counter-clockwise seen from the side `u x v` points to.
    fn push_quad(&mut self, center: Vec3, u: Vec3, v: Vec3) {
        let normal = u.cross(v).normalize().to_array();
        let base = self.vertices.len() as u16;

        for corner in [center - u - v, center + u - v, center + u + v, center - u + v] {
            self.vertices.push(MeshVertex::new(corner.to_array(), normal));
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Axis-aligned box centered on the origin, one quad per face
pub fn box_mesh(width: f32, height: f32, depth: f32) -> MeshData {
    let half = Vec3::new(width, height, depth) * 0.5;
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];

    let mut mesh = MeshData::default();
    for (normal, u, v) in faces {
        mesh.push_quad(normal * half, u * half, v * half);
    }
    mesh
}

/// Plane in the local XY plane facing +Z
pub fn plane_mesh(width: f32, height: f32) -> MeshData {
    let mut mesh = MeshData::default();
    mesh.push_quad(
        Vec3::ZERO,
        Vec3::new(width * 0.5, 0.0, 0.0),
        Vec3::new(0.0, height * 0.5, 0.0),
    );
    mesh
}

/// Line list for an axes helper: X red, Y green, Z blue
pub fn axes_lines(size: f32) -> Vec<LineVertex> {
    [
        (Vec3::X, [1.0, 0.0, 0.0]),
        (Vec3::Y, [0.0, 1.0, 0.0]),
        (Vec3::Z, [0.0, 0.0, 1.0]),
    ]
    .into_iter()
    .flat_map(|(axis, color)| {
        [
            LineVertex::new([0.0; 3], color),
            LineVertex::new((axis * size).to_array(), color),
        ]
    })
    .collect()
}
