use super::Scene;
use crate::config::{FieldParams, SceneKind};
use crate::constants::{ORBIT_RADIUS, ORBIT_SPEED, REPELLER_DAMPING};
use crate::field::Field;
use crate::geometry::InstanceRaw;
use crate::input::InputState;
use crate::lights::{rgb_hex, Environment, LightRig, Material, PointLight};
use crate::motion::damp_vec3;
use crate::state::{Camera, Viewport};
use glam::Vec3;
use rand::Rng;

const KEY: usize = 0;
const SECONDARY: usize = 1;

/// Dark metallic cubes lit by a blue light that follows the pointer; cubes
/// near the light are pushed away and spin faster.
pub struct CubeField {
    field: Field,
    camera: Camera,
    lights: LightRig,
    environment: Environment,
    highlight: Vec3,
}

impl CubeField {
    pub fn new<R: Rng>(params: FieldParams, viewport: Viewport, rng: &mut R) -> Self {
        let camera = Camera::from_rig(&params.camera, viewport);
        let lights = LightRig::new(0x202020)
            .with(PointLight::new(
                Vec3::new(0.0, 0.0, params.repeller_plane_z),
                0x3b82f6,
                100.0,
                100.0,
            ))
            .with(PointLight::new(Vec3::new(-20.0, 20.0, 10.0), 0xbfdbfe, 50.0, 80.0));
        Self {
            field: Field::scatter(params, rng),
            camera,
            lights,
            environment: Environment {
                background: Vec3::ZERO,
                fog_density: 0.02,
                material: Material {
                    color: rgb_hex(0x111111),
                    metalness: 0.9,
                    roughness: 0.2,
                    clearcoat: 0.5,
                },
            },
            highlight: rgb_hex(0x3b82f6),
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn key_light(&self) -> &PointLight {
        &self.lights.points[KEY]
    }
}

impl Scene for CubeField {
    fn kind(&self) -> SceneKind {
        SceneKind::CubeField
    }

    fn update(&mut self, input: &InputState, time: f32) {
        let plane_z = self.field.params.repeller_plane_z;
        let key = &mut self.lights.points[KEY];
        if let Some(aim) = self.camera.cursor_on_plane(input.cursor_ndc, plane_z) {
            key.position = damp_vec3(
                key.position,
                Vec3::new(aim.x, aim.y, plane_z),
                REPELLER_DAMPING,
            );
        }
        let repeller = key.position.truncate();

        let secondary = &mut self.lights.points[SECONDARY];
        secondary.position.x = (time * ORBIT_SPEED).sin() * ORBIT_RADIUS;
        secondary.position.y = (time * ORBIT_SPEED).cos() * ORBIT_RADIUS;

        self.field.step(repeller, time);

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
