// Shared tuning constants used by all scenes and by the web frontend.

// Wave bars never collapse below this height scale
pub const MIN_WAVE_HEIGHT: f32 = 0.1;

// Uniform buffer holds this many point lights
pub const MAX_LIGHTS: usize = 2;

// Repeller (light or virtual cursor) chases the projected pointer at this rate
pub const REPELLER_DAMPING: f32 = 0.1;

// Orbiting secondary light
pub const ORBIT_SPEED: f32 = 0.5; // radians per second
pub const ORBIT_RADIUS: f32 = 30.0;

// NDC depth used when unprojecting the cursor; any depth inside the frustum
// yields the same ray direction
pub const CURSOR_UNPROJECT_DEPTH: f32 = 0.5;

// Cursor ring chases the pointer at this rate
pub const CURSOR_RING_DAMPING: f32 = 0.15;

// Fraction of an element that must be visible before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.1;

