use crate::constants::MAX_LIGHTS;
use glam::Vec3;
use smallvec::SmallVec;

/// Linear RGB from a `0xRRGGBB` sRGB hex colour.
pub fn rgb_hex(hex: u32) -> Vec3 {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
    Vec3::new(channel(16), channel(8), channel(0))
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
    /// Distance at which the light has faded out completely.
    pub range: f32,
}

impl PointLight {
    pub fn new(position: Vec3, hex: u32, intensity: f32, range: f32) -> Self {
        Self {
            position,
            color: rgb_hex(hex),
            intensity,
            range,
        }
    }
}

/// Ambient term plus up to [`MAX_LIGHTS`] point lights.
#[derive(Clone, Debug)]
pub struct LightRig {
    pub ambient: Vec3,
    pub points: SmallVec<[PointLight; MAX_LIGHTS]>,
}

impl LightRig {
    pub fn new(ambient_hex: u32) -> Self {
        Self {
            ambient: rgb_hex(ambient_hex),
            points: SmallVec::new(),
        }
    }

    pub fn with(mut self, light: PointLight) -> Self {
        if self.points.len() < MAX_LIGHTS {
            self.points.push(light);
        } else {
            log::warn!("[lights] dropping light beyond {}", MAX_LIGHTS);
        }
        self
    }
}

/// Shared surface description for every primitive in a scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub metalness: f32,
    pub roughness: f32,
    pub clearcoat: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    pub background: Vec3,
    /// Exponential-squared fog density; fog colour is the background.
    pub fog_density: f32,
    pub material: Material,
}
