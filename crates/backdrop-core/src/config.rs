//! Fixed per-scene presets and their validation.
//!
//! Every scene is an independent configuration: counts, spreads, damping
//! constants and camera rigs are chosen here once and never change while the
//! page is open.

use glam::{Vec2, Vec3};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown scene `{0}` (expected cube-field, wave-grid or repulsion-field)")]
    UnknownScene(String),
    #[error("{scene}: primitive count must be non-zero")]
    EmptyField { scene: SceneKind },
    #[error("{scene}: grid needs at least one row and one column, got {rows}x{cols}")]
    EmptyGrid {
        scene: SceneKind,
        rows: usize,
        cols: usize,
    },
    #[error("{scene}: {name} must be in (0, 1], got {value}")]
    Damping {
        scene: SceneKind,
        name: &'static str,
        value: f32,
    },
    #[error("{scene}: repulsion radius must be positive, got {value}")]
    Radius { scene: SceneKind, value: f32 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SceneKind {
    #[default]
    CubeField,
    WaveGrid,
    RepulsionField,
}

impl SceneKind {
    pub const ALL: [SceneKind; 3] = [
        SceneKind::CubeField,
        SceneKind::WaveGrid,
        SceneKind::RepulsionField,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SceneKind::CubeField => "cube-field",
            SceneKind::WaveGrid => "wave-grid",
            SceneKind::RepulsionField => "repulsion-field",
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SceneKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SceneKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownScene(wanted.to_string()))
    }
}

/// Camera placement and pointer parallax.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub rest: Vec3,
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
    /// World units of camera drift per pixel of pointer offset.
    pub parallax: f32,
    pub damping: f32,
}

impl CameraRig {
    /// Where the camera eye wants to be for a pointer `offset` from the
    /// viewport centre. Screen y grows downwards, world y upwards.
    #[inline]
    pub fn parallax_target(&self, offset: Vec2) -> Vec2 {
        Vec2::new(
            self.rest.x + offset.x * self.parallax,
            self.rest.y - offset.y * self.parallax,
        )
    }
}

/// Scattered cube field with pointer repulsion.
#[derive(Clone, Debug)]
pub struct FieldParams {
    pub count: usize,
    pub cube_size: f32,
    /// Full extent of the random placement box, centred on the origin.
    pub spread: Vec3,
    /// Width of the per-axis spin range; spins are drawn from `±spin_range/2`.
    pub spin_range: f32,
    pub radius: f32,
    pub push: f32,
    pub repel_damping: f32,
    pub idle_damping: f32,
    pub float_amplitude: f32,
    /// Extra rotation per frame at full repulsion force.
    pub extra_spin: f32,
    /// How strongly the highlight colour is mixed in at full force.
    pub highlight: f32,
    /// z of the plane the pointer is projected onto to place the repeller.
    pub repeller_plane_z: f32,
    pub camera: CameraRig,
}

impl FieldParams {
    pub fn cube_field() -> Self {
        Self {
            count: 300,
            cube_size: 1.5,
            spread: Vec3::new(180.0, 120.0, 80.0),
            spin_range: 0.01,
            radius: 25.0,
            push: 5.0,
            repel_damping: 0.1,
            idle_damping: 0.05,
            float_amplitude: 0.05,
            extra_spin: 0.05,
            highlight: 0.0, // shared look: only the light highlights cubes
            repeller_plane_z: 20.0,
            camera: CameraRig {
                rest: Vec3::new(0.0, 0.0, 50.0),
                fovy_degrees: 75.0,
                znear: 0.1,
                zfar: 1000.0,
                parallax: 0.005,
                damping: 0.05,
            },
        }
    }

    pub fn repulsion_field() -> Self {
        Self {
            count: 220,
            cube_size: 1.2,
            spread: Vec3::new(160.0, 100.0, 40.0),
            spin_range: 0.008,
            radius: 20.0,
            push: 6.0,
            repel_damping: 0.08,
            idle_damping: 0.05,
            float_amplitude: 0.0,
            extra_spin: 0.03,
            highlight: 0.85,
            repeller_plane_z: 0.0,
            camera: CameraRig {
                rest: Vec3::new(0.0, 0.0, 45.0),
                fovy_degrees: 70.0,
                znear: 0.1,
                zfar: 1000.0,
                parallax: 0.004,
                damping: 0.05,
            },
        }
    }

    pub fn validate(&self, scene: SceneKind) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::EmptyField { scene });
        }
        if self.radius.is_nan() || self.radius <= 0.0 {
            return Err(ConfigError::Radius {
                scene,
                value: self.radius,
            });
        }
        check_damping(scene, "repel_damping", self.repel_damping)?;
        check_damping(scene, "idle_damping", self.idle_damping)?;
        check_damping(scene, "camera.damping", self.camera.damping)
    }
}

/// Instanced grid of bars driven by a travelling wave.
#[derive(Clone, Debug)]
pub struct WaveParams {
    pub cols: usize,
    pub rows: usize,
    pub spacing: f32,
    pub bar_width: f32,
    pub bar_height: f32,
    pub spin_range: f32,
    pub damping: f32,
    pub base: f32,
    pub amplitude: [f32; 3],
    /// Spatial frequency of the column, row and diagonal terms.
    pub frequency: [f32; 3],
    /// Time speed of the column and row terms.
    pub speed: [f32; 2],
    pub scroll_frequency: f32,
    pub camera: CameraRig,
}

impl WaveParams {
    pub fn wave_grid() -> Self {
        Self {
            cols: 48,
            rows: 32,
            spacing: 2.2,
            bar_width: 1.6,
            bar_height: 2.0,
            spin_range: 0.004,
            damping: 0.1,
            base: 1.0,
            amplitude: [0.9, 0.9, 0.7],
            frequency: [0.35, 0.3, 0.15],
            speed: [1.2, 0.9],
            scroll_frequency: 0.004,
            camera: CameraRig {
                rest: Vec3::new(0.0, 32.0, 58.0),
                fovy_degrees: 60.0,
                znear: 0.1,
                zfar: 1000.0,
                parallax: 0.01,
                damping: 0.05,
            },
        }
    }

    /// Largest height scale the wave can reach.
    pub fn peak_height(&self) -> f32 {
        self.base + self.amplitude.iter().map(|a| a.abs()).sum::<f32>()
    }

    pub fn validate(&self, scene: SceneKind) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                scene,
                rows: self.rows,
                cols: self.cols,
            });
        }
        check_damping(scene, "damping", self.damping)?;
        check_damping(scene, "camera.damping", self.camera.damping)
    }
}

fn check_damping(scene: SceneKind, name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::Damping { scene, name, value })
    }
}
