use super::Scene;
use crate::config::{SceneKind, WaveParams};
use crate::constants::MIN_WAVE_HEIGHT;
use crate::geometry::InstanceRaw;
use crate::input::InputState;
use crate::lights::{rgb_hex, Environment, LightRig, Material, PointLight};
use crate::motion::damp_vec3;
use crate::state::{Camera, Viewport};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

// Secondary light circles the grid on the xz plane
const ORBIT_RADIUS: f32 = 40.0;
const ORBIT_HEIGHT: f32 = 20.0;
const ORBIT_SPEED: f32 = 0.3;

/// One entry of the instanced bar buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarSlot {
    pub origin: Vec3,
    pub position: Vec3,
    pub yaw: f32,
    pub spin: f32,
    pub height: f32,
}

/// Height scale of the bar at `(row, col)`: three travelling waves over the
/// grid, time and scroll, never below [`MIN_WAVE_HEIGHT`].
pub fn wave_height(params: &WaveParams, row: usize, col: usize, time: f32, scroll: f32) -> f32 {
    let (r, c) = (row as f32, col as f32);
    let [a0, a1, a2] = params.amplitude;
    let [f0, f1, f2] = params.frequency;
    let [s0, s1] = params.speed;
    let h = params.base
        + a0 * (c * f0 + time * s0).sin()
        + a1 * (r * f1 + time * s1).cos()
        + a2 * ((r + c) * f2 + scroll * params.scroll_frequency).sin();
    // NaN inputs fall through max() to the floor
    h.max(MIN_WAVE_HEIGHT)
}

/// A floor of bars whose heights ripple with time and page scroll.
pub struct WaveGrid {
    params: WaveParams,
    slots: Vec<BarSlot>,
    camera: Camera,
    lights: LightRig,
    environment: Environment,
    low: Vec3,
    high: Vec3,
}

impl WaveGrid {
    pub fn new<R: Rng>(params: WaveParams, viewport: Viewport, rng: &mut R) -> Self {
        let camera = Camera::from_rig(&params.camera, viewport);
        let half_cols = (params.cols as f32 - 1.0) / 2.0;
        let half_rows = (params.rows as f32 - 1.0) / 2.0;
        let mut slots = Vec::with_capacity(params.rows * params.cols);
        for row in 0..params.rows {
            for col in 0..params.cols {
                let origin = Vec3::new(
                    (col as f32 - half_cols) * params.spacing,
                    0.0,
                    (row as f32 - half_rows) * params.spacing,
                );
                slots.push(BarSlot {
                    origin,
                    position: origin,
                    yaw: rng.gen::<f32>() * TAU,
                    spin: (rng.gen::<f32>() - 0.5) * params.spin_range,
                    height: wave_height(&params, row, col, 0.0, 0.0),
                });
            }
        }
        let lights = LightRig::new(0x0f172a)
            .with(PointLight::new(Vec3::new(0.0, 40.0, 10.0), 0x38bdf8, 300.0, 140.0))
            .with(PointLight::new(
                Vec3::new(0.0, ORBIT_HEIGHT, ORBIT_RADIUS),
                0xa78bfa,
                150.0,
                120.0,
            ));
        Self {
            params,
            slots,
            camera,
            lights,
            environment: Environment {
                background: rgb_hex(0x020617),
                fog_density: 0.012,
                material: Material {
                    color: rgb_hex(0x1e293b),
                    metalness: 0.6,
                    roughness: 0.4,
                    clearcoat: 0.2,
                },
            },
            low: rgb_hex(0x1e293b),
            high: rgb_hex(0x0ea5e9),
        }
    }

    #[inline]
    pub fn slot_index(&self, row: usize, col: usize) -> usize {
        row * self.params.cols + col
    }

    #[inline]
    pub fn cell(&self, slot: usize) -> (usize, usize) {
        (slot / self.params.cols, slot % self.params.cols)
    }

    pub fn slots(&self) -> &[BarSlot] {
        &self.slots
    }

    pub fn params(&self) -> &WaveParams {
        &self.params
    }
}

impl Scene for WaveGrid {
    fn kind(&self) -> SceneKind {
        SceneKind::WaveGrid
    }

    fn update(&mut self, input: &InputState, time: f32) {
        let orbit = &mut self.lights.points[1];
        orbit.position.x = (time * ORBIT_SPEED).sin() * ORBIT_RADIUS;
        orbit.position.z = (time * ORBIT_SPEED).cos() * ORBIT_RADIUS;

        let cols = self.params.cols;
        for (i, slot) in self.slots.iter_mut().enumerate() {
            slot.yaw += slot.spin;
            // at-rest smoothing step; bars hold their grid origin
            slot.position = damp_vec3(slot.position, slot.origin, self.params.damping);
            slot.height = wave_height(&self.params, i / cols, i % cols, time, input.scroll);
        }

        self.camera.follow_pointer(&self.params.camera, input.offset);
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
        self.slots.len()
    }

    fn write_instances(&self, out: &mut Vec<InstanceRaw>) {
        let span = (self.params.peak_height() - MIN_WAVE_HEIGHT).max(f32::EPSILON);
        let p = &self.params;
        out.extend(self.slots.iter().map(|s| {
            let tall = s.height * p.bar_height;
            let t = ((s.height - MIN_WAVE_HEIGHT) / span).clamp(0.0, 1.0);
            InstanceRaw::new(
                s.position + Vec3::Y * (tall * 0.5),
                Vec3::new(0.0, s.yaw, 0.0),
                Vec3::new(p.bar_width, tall, p.bar_width),
                self.low.lerp(self.high, t),
            )
        }));
    }
}
