//! Camera and viewport types shared with the web frontend.
//!
//! These types avoid platform-specific APIs. The web frontend feeds them the
//! window size and pointer position and reads back the matrices it uploads.

use crate::config::CameraRig;
use crate::constants::CURSOR_UNPROJECT_DEPTH;
use crate::motion::damp_vec2;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Size of the area the scene is projected onto, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    #[inline]
    pub fn half(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera at the rig's rest position looking at the origin.
    pub fn from_rig(rig: &CameraRig, viewport: Viewport) -> Self {
        let mut camera = Self {
            eye: rig.rest,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: rig.fovy_degrees.to_radians(),
            znear: rig.znear,
            zfar: rig.zfar,
        };
        camera.set_viewport(viewport);
        camera
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Recompute the aspect ratio for a new viewport. Empty viewports are
    /// ignored and keep the previous projection.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        if viewport.is_empty() {
            return false;
        }
        self.aspect = viewport.aspect();
        true
    }

    /// World-space ray through a normalized device coordinate.
    ///
    /// Returns `(ray_origin, ray_direction)`.
    pub fn cursor_ray(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_projection().inverse();
        let p = inv * Vec4::new(ndc.x, ndc.y, CURSOR_UNPROJECT_DEPTH, 1.0);
        let p: Vec3 = p.truncate() / p.w;
        (self.eye, (p - self.eye).normalize())
    }

    /// Where the cursor ray crosses the plane `z = plane_z`, or `None` when the
    /// ray runs parallel to it.
    pub fn cursor_on_plane(&self, ndc: Vec2, plane_z: f32) -> Option<Vec3> {
        let (ro, rd) = self.cursor_ray(ndc);
        if rd.z.abs() <= 1e-6 {
            return None;
        }
        let t = (plane_z - ro.z) / rd.z;
        Some(ro + rd * t)
    }

    /// Drift the eye towards the rig's parallax target and face the origin.
    pub fn follow_pointer(&mut self, rig: &CameraRig, offset: Vec2) {
        let xy = damp_vec2(self.eye.truncate(), rig.parallax_target(offset), rig.damping);
        self.eye.x = xy.x;
        self.eye.y = xy.y;
        self.target = Vec3::ZERO;
    }
}
