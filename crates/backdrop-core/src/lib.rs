pub mod clock;
pub mod config;
pub mod constants;
pub mod field;
pub mod geometry;
pub mod input;
pub mod lights;
pub mod motion;
pub mod scene;
pub mod state;
pub mod ui;

pub static BACKDROP_WGSL: &str = include_str!("../shaders/backdrop.wgsl");

pub use clock::*;
pub use config::*;
pub use field::*;
pub use geometry::*;
pub use input::*;
pub use lights::*;
pub use motion::*;
pub use scene::*;
pub use state::*;
pub use ui::*;
