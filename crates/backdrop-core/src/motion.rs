use glam::{Vec2, Vec3};

/// One step of exponential smoothing: `x += (target - x) * k`.
///
/// A first-order low-pass filter; with `0 < k < 1` it approaches the target
/// asymptotically and never lands on it exactly.
#[inline]
pub fn damp(current: f32, target: f32, k: f32) -> f32 {
    current + (target - current) * k
}

#[inline]
pub fn damp_vec2(current: Vec2, target: Vec2, k: f32) -> Vec2 {
    current + (target - current) * k
}

#[inline]
pub fn damp_vec3(current: Vec3, target: Vec3, k: f32) -> Vec3 {
    current + (target - current) * k
}

/// Displacement produced by a repeller on one primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Push {
    /// Offset from the primitive's origin, in world units.
    pub offset: Vec2,
    /// Normalized strength in `(0, 1]`.
    pub force: f32,
}

/// Linear falloff repulsion inside a fixed radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Repulsion {
    pub radius: f32,
    pub push: f32,
}

impl Repulsion {
    pub fn new(radius: f32, push: f32) -> Self {
        Self { radius, push }
    }

    /// `(radius - distance) / radius` inside the radius, zero at and beyond it.
    #[inline]
    pub fn force(&self, distance: f32) -> f32 {
        if distance < self.radius {
            (self.radius - distance) / self.radius
        } else {
            0.0
        }
    }

    /// Push away from `repeller` for a primitive currently at `at`.
    ///
    /// Direction follows `atan2(dy, dx)`, so a primitive sitting exactly on
    /// the repeller is pushed along +x.
    pub fn push_from(&self, repeller: Vec2, at: Vec2) -> Option<Push> {
        let d = at - repeller;
        let distance = d.length();
        if distance >= self.radius {
            return None;
        }
        let force = self.force(distance);
        let angle = d.y.atan2(d.x);
        Some(Push {
            offset: Vec2::new(angle.cos(), angle.sin()) * force * self.push,
            force,
        })
    }
}
