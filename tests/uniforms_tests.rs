// Uniform packing for the instanced pipeline, checked on the host.

#![allow(dead_code)]
mod uniforms {
    include!("../src/render/uniforms.rs");
}

use backdrop_core::{build_scene, InputState, SceneKind, Viewport};
use uniforms::{clear_rgba, LightPacked, SceneUniforms};

#[test]
fn uniform_block_matches_shader_layout() {
    assert_eq!(std::mem::size_of::<LightPacked>(), 32);
    assert_eq!(std::mem::size_of::<SceneUniforms>(), 192);
    assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);
}

#[test]
fn packs_camera_lights_and_material() {
    for kind in SceneKind::ALL {
        let scene = build_scene(kind, 3, Viewport::new(800.0, 600.0)).unwrap();
        let u = SceneUniforms::from_scene(scene.as_ref());

        let cam = scene.camera();
        assert_eq!(u.view_proj, cam.view_projection().to_cols_array_2d());
        assert_eq!(u.camera_pos, cam.eye.extend(1.0).to_array());

        let rig = scene.lights();
        assert_eq!(u.material[3], rig.points.len() as f32);
        for (packed, light) in u.lights.iter().zip(rig.points.iter()) {
            assert_eq!(packed.position_range[3], light.range);
            assert_eq!(packed.color_intensity[3], light.intensity);
        }

        let env = scene.environment();
        assert_eq!(u.fog[3], env.fog_density);
        assert_eq!(u.material[0], env.material.metalness);
    }
}

#[test]
fn packed_light_follows_the_scene() {
    let mut scene = build_scene(SceneKind::CubeField, 1, Viewport::new(800.0, 600.0)).unwrap();
    let before = SceneUniforms::from_scene(scene.as_ref());
    let mut input = InputState::new(Viewport::new(800.0, 600.0));
    input.pointer_moved(780.0, 20.0);
    for i in 0..10 {
        scene.update(&input, i as f32 / 60.0);
    }
    let after = SceneUniforms::from_scene(scene.as_ref());
    assert_ne!(before.lights[0], after.lights[0]);
    assert_ne!(before.camera_pos, after.camera_pos);
}

#[test]
fn clear_colour_is_opaque_background() {
    let scene = build_scene(SceneKind::CubeField, 1, Viewport::new(640.0, 480.0)).unwrap();
    let bg = scene.environment().background;
    assert_eq!(
        clear_rgba(scene.as_ref()),
        [bg.x as f64, bg.y as f64, bg.z as f64, 1.0]
    );
}
