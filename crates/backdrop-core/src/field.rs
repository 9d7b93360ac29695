//! Scattered cubes that float around their origin and shy away from a
//! repeller. Shared by the cube-field and repulsion-field scenes.

use crate::config::FieldParams;
use crate::geometry::InstanceRaw;
use crate::motion::{damp, damp_vec2, Repulsion};
use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Per-primitive values drawn once at creation and never changed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSeed {
    pub origin: Vec3,
    /// Rotation added every frame on x and y.
    pub spin: Vec2,
    pub phase: f32,
}

#[derive(Clone, Debug)]
pub struct Primitive {
    pub position: Vec3,
    pub rotation: Vec3,
    pub seed: MotionSeed,
    /// Repulsion force applied on the last frame, zero when idle.
    pub force: f32,
}

impl Primitive {
    pub fn scatter<R: Rng>(rng: &mut R, params: &FieldParams) -> Self {
        let origin = Vec3::new(
            (rng.gen::<f32>() - 0.5) * params.spread.x,
            (rng.gen::<f32>() - 0.5) * params.spread.y,
            (rng.gen::<f32>() - 0.5) * params.spread.z,
        );
        let rotation = Vec3::new(rng.gen::<f32>() * PI, rng.gen::<f32>() * PI, 0.0);
        let spin = Vec2::new(
            (rng.gen::<f32>() - 0.5) * params.spin_range,
            (rng.gen::<f32>() - 0.5) * params.spin_range,
        );
        Self {
            position: origin,
            rotation,
            seed: MotionSeed {
                origin,
                spin,
                phase: rng.gen::<f32>() * TAU,
            },
            force: 0.0,
        }
    }

    /// Advance one frame against a repeller at `repeller` (xy only).
    pub fn step(&mut self, repeller: Vec2, time: f32, params: &FieldParams, repulsion: &Repulsion) {
        self.rotation.x += self.seed.spin.x;
        self.rotation.y += self.seed.spin.y;

        let origin = self.seed.origin.truncate();
        let current = self.position.truncate();
        let next = match repulsion.push_from(repeller, current) {
            Some(push) => {
                self.rotation.x += params.extra_spin * push.force;
                self.rotation.y += params.extra_spin * push.force;
                self.force = push.force;
                damp_vec2(current, origin + push.offset, params.repel_damping)
            }
            None => {
                self.force = 0.0;
                let float_y = (time + self.seed.phase).sin() * params.float_amplitude;
                Vec2::new(
                    damp(current.x, origin.x, params.idle_damping),
                    damp(current.y, origin.y + float_y, params.idle_damping),
                )
            }
        };
        self.position.x = next.x;
        self.position.y = next.y;
    }
}

pub struct Field {
    pub params: FieldParams,
    pub repulsion: Repulsion,
    pub primitives: Vec<Primitive>,
}

impl Field {
    pub fn scatter<R: Rng>(params: FieldParams, rng: &mut R) -> Self {
        let primitives = (0..params.count)
            .map(|_| Primitive::scatter(rng, &params))
            .collect();
        Self {
            repulsion: Repulsion::new(params.radius, params.push),
            params,
            primitives,
        }
    }

    pub fn step(&mut self, repeller: Vec2, time: f32) {
        for p in &mut self.primitives {
            p.step(repeller, time, &self.params, &self.repulsion);
        }
    }

    /// Append one instance per primitive, tinted towards `highlight` by the
    /// repulsion force.
    pub fn write_instances(&self, base: Vec3, highlight: Vec3, out: &mut Vec<InstanceRaw>) {
        let scale = Vec3::splat(self.params.cube_size);
        out.extend(self.primitives.iter().map(|p| {
            let tint = (p.force * self.params.highlight).clamp(0.0, 1.0);
            InstanceRaw::new(p.position, p.rotation, scale, base.lerp(highlight, tint))
        }));
    }
}
