// Page contract and renderer tuning for the web frontend.
//
// Selectors and class names are the only coupling to the page markup; keep
// them here so the stylesheet and this crate can be checked side by side.
// Scene canvas
pub const CANVAS_ID: &str = "bg-canvas";
pub const SCENE_ATTR: &str = "data-scene";
pub const SEED_ATTR: &str = "data-seed";

// Backing store never exceeds this many device pixels per CSS pixel
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Cursor follower
pub const CURSOR_DOT_SELECTOR: &str = ".cursor-dot";
pub const CURSOR_RING_SELECTOR: &str = ".cursor-ring";

// Hover state on <body>
pub const HOVER_TARGETS_SELECTOR: &str = "a, button, .project-card, .btn";
pub const HOVERING_CLASS: &str = "hovering";

// In-page anchors
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Scroll reveal
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";
pub const VISIBLE_CLASS: &str = "visible";

// Mobile menu
pub const BURGER_SELECTOR: &str = ".burger";
pub const NAV_SELECTOR: &str = ".nav-links";
pub const NAV_LINK_SELECTOR: &str = ".nav-links li";
pub const NAV_OPEN_CLASS: &str = "active";
pub const BURGER_OPEN_CLASS: &str = "toggle";
