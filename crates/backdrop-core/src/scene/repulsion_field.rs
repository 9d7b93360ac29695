use super::Scene;
use crate::config::{FieldParams, SceneKind};
use crate::constants::REPELLER_DAMPING;
use crate::field::Field;
use crate::geometry::InstanceRaw;
use crate::input::InputState;
use crate::lights::{rgb_hex, Environment, LightRig, Material, PointLight};
use crate::motion::damp_vec3;
use crate::state::{Camera, Viewport};
use glam::Vec3;
use rand::Rng;

// Cursor light hovers this far in front of the virtual cursor
const CURSOR_LIGHT_LIFT: f32 = 15.0;

/// A flatter slab of cubes pushed around by a smoothed virtual cursor.
/// Cubes glow while they are being pushed.
pub struct RepulsionField {
    field: Field,
    camera: Camera,
    lights: LightRig,
    environment: Environment,
    highlight: Vec3,
    /// Smoothed pointer projected onto the field plane.
    cursor: Vec3,
}

impl RepulsionField {
    pub fn new<R: Rng>(params: FieldParams, viewport: Viewport, rng: &mut R) -> Self {
        let camera = Camera::from_rig(&params.camera, viewport);
        let cursor = Vec3::new(0.0, 0.0, params.repeller_plane_z);
        let lights = LightRig::new(0x1e1b2e)
            .with(PointLight::new(
                cursor + Vec3::Z * CURSOR_LIGHT_LIFT,
                0x60a5fa,
                80.0,
                60.0,
            ))
            .with(PointLight::new(Vec3::new(30.0, -20.0, 30.0), 0xe2e8f0, 40.0, 120.0));
        Self {
            field: Field::scatter(params, rng),
            camera,
            lights,
            environment: Environment {
                background: rgb_hex(0x05050a),
                fog_density: 0.018,
                material: Material {
                    color: rgb_hex(0x18181b),
                    metalness: 0.7,
                    roughness: 0.35,
                    clearcoat: 0.3,
                },
            },
            highlight: rgb_hex(0xf472b6),
            cursor,
        }
    }

    pub fn cursor(&self) -> Vec3 {
        self.cursor
    }

    pub fn field(&self) -> &Field {
        &self.field
    }
}

impl Scene for RepulsionField {
    fn kind(&self) -> SceneKind {
        SceneKind::RepulsionField
    }

    fn update(&mut self, input: &InputState, time: f32) {
        let plane_z = self.field.params.repeller_plane_z;
        if let Some(aim) = self.camera.cursor_on_plane(input.cursor_ndc, plane_z) {
            self.cursor = damp_vec3(self.cursor, Vec3::new(aim.x, aim.y, plane_z), REPELLER_DAMPING);
        }
        self.lights.points[0].position = self.cursor + Vec3::Z * CURSOR_LIGHT_LIFT;

        self.field.step(self.cursor.truncate(), time);

        self.camera
            .follow_pointer(&self.field.params.camera, input.offset);
    }

    fn camera(&self) -> &Camera {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    fn lights(&self) -> &LightRig {
        &self.lights
    }

    fn environment(&self) -> &Environment {
        &self.environment
    }

    fn instance_count(&self) -> usize {
        self.field.primitives.len()
    }

    fn write_instances(&self, out: &mut Vec<InstanceRaw>) {
        self.field
            .write_instances(self.environment.material.color, self.highlight, out);
    }
}
