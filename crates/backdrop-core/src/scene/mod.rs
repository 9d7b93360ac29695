//! The three page backdrops.
//!
//! Each scene owns its primitives, camera and lights, and is advanced by
//! [`Scene::update`] once per display refresh. Scenes are independent of
//! each other; a page picks one by [`SceneKind`].

mod cube_field;
mod repulsion_field;
mod wave_grid;

pub use cube_field::CubeField;
pub use repulsion_field::RepulsionField;
pub use wave_grid::{wave_height, BarSlot, WaveGrid};

use crate::config::{ConfigError, FieldParams, SceneKind, WaveParams};
use crate::geometry::InstanceRaw;
use crate::input::InputState;
use crate::lights::{Environment, LightRig};
use crate::state::{Camera, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub trait Scene {
    fn kind(&self) -> SceneKind;

    /// Advance every primitive, the lights and the camera by one frame.
    fn update(&mut self, input: &InputState, time: f32);

    fn camera(&self) -> &Camera;
    fn camera_mut(&mut self) -> &mut Camera;
    fn lights(&self) -> &LightRig;
    fn environment(&self) -> &Environment;

    /// Fixed for the lifetime of the scene.
    fn instance_count(&self) -> usize;

    /// Append one record per primitive, in index order.
    fn write_instances(&self, out: &mut Vec<InstanceRaw>);

    fn resize(&mut self, viewport: Viewport) -> bool {
        self.camera_mut().set_viewport(viewport)
    }
}

/// Build the preset for `kind` with a deterministic placement seed.
pub fn build_scene(
    kind: SceneKind,
    seed: u64,
    viewport: Viewport,
) -> Result<Box<dyn Scene>, ConfigError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let scene: Box<dyn Scene> = match kind {
        SceneKind::CubeField => {
            let params = FieldParams::cube_field();
            params.validate(kind)?;
            Box::new(CubeField::new(params, viewport, &mut rng))
        }
        SceneKind::RepulsionField => {
            let params = FieldParams::repulsion_field();
            params.validate(kind)?;
            Box::new(RepulsionField::new(params, viewport, &mut rng))
        }
        SceneKind::WaveGrid => {
            let params = WaveParams::wave_grid();
            params.validate(kind)?;
            Box::new(WaveGrid::new(params, viewport, &mut rng))
        }
    };
    log::info!(
        "[scene] {} instances={} seed={}",
        kind,
        scene.instance_count(),
        seed
    );
    Ok(scene)
}
