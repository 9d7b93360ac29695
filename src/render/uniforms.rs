use backdrop_core::constants::MAX_LIGHTS;
use backdrop_core::Scene;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightPacked {
    pub position_range: [f32; 4],
    pub color_intensity: [f32; 4],
}

/// Per-frame uniform block; layout matches `Uniforms` in `backdrop.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    pub ambient: [f32; 4],
    pub fog: [f32; 4],
    pub material: [f32; 4],
    pub lights: [LightPacked; MAX_LIGHTS],
}

impl SceneUniforms {
    pub fn from_scene(scene: &dyn Scene) -> Self {
        let camera = scene.camera();
        let rig = scene.lights();
        let env = scene.environment();
        let mut lights = [LightPacked::default(); MAX_LIGHTS];
        for (slot, l) in lights.iter_mut().zip(rig.points.iter()) {
            *slot = LightPacked {
                position_range: l.position.extend(l.range).to_array(),
                color_intensity: l.color.extend(l.intensity).to_array(),
            };
        }
        let light_count = rig.points.len().min(MAX_LIGHTS);
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            ambient: rig.ambient.extend(0.0).to_array(),
            fog: env.background.extend(env.fog_density).to_array(),
            material: [
                env.material.metalness,
                env.material.roughness,
                env.material.clearcoat,
                light_count as f32,
            ],
            lights,
        }
    }
}

/// Background colour as linear RGBA, for the clear value of the frame.
pub fn clear_rgba(scene: &dyn Scene) -> [f64; 4] {
    let bg = scene.environment().background;
    [bg.x as f64, bg.y as f64, bg.z as f64, 1.0]
}
