//! GPU-facing records: mesh vertices and per-instance transforms.

use glam::{EulerRot, Mat4, Quat, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// One entry of the instanced transform buffer. 80 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl InstanceRaw {
    /// Scale, then rotate (Euler XYZ), then translate.
    pub fn new(translation: Vec3, rotation: Vec3, scale: Vec3, color: Vec3) -> Self {
        let rot = Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z);
        Self {
            model: Mat4::from_scale_rotation_translation(scale, rot, translation).to_cols_array_2d(),
            color: color.extend(1.0).to_array(),
        }
    }
}

/// Axis-aligned box centred on the origin with outward normals and
/// counter-clockwise front faces.
pub fn box_mesh(size: Vec3) -> (Vec<Vertex>, Vec<u16>) {
    let h = size * 0.5;
    // (normal, u axis, v axis); u x v == normal keeps the winding CCW
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, u, v) in faces {
        let base = vertices.len() as u16;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let p = (normal + u * su + v * sv) * h;
            vertices.push(Vertex {
                position: p.to_array(),
                normal: normal.to_array(),
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    (vertices, indices)
}

