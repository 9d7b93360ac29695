//! State behind the page's DOM interactions. The web frontend mirrors these
//! into class lists and inline styles.

use crate::constants::CURSOR_RING_DAMPING;
use crate::motion::damp_vec2;
use fnv::FnvHashMap;
use glam::Vec2;

/// Mobile navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// One tap on the burger.
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Any navigation link was chosen.
    pub fn closed(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

/// Dot pinned to the pointer plus a ring that eases after it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFollower {
    pub pointer: Vec2,
    pub ring: Vec2,
    pub damping: f32,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self {
            pointer: Vec2::ZERO,
            ring: Vec2::ZERO,
            damping: CURSOR_RING_DAMPING,
        }
    }
}

impl CursorFollower {
    /// Record the pointer and return where the dot goes.
    pub fn pointer_moved(&mut self, x: f32, y: f32) -> Vec2 {
        self.pointer = Vec2::new(x, y);
        self.pointer
    }

    /// Advance the ring by one frame and return its new position.
    pub fn step(&mut self) -> Vec2 {
        self.ring = damp_vec2(self.ring, self.pointer, self.damping);
        self.ring
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    Hidden,
    Visible,
}

/// One-shot reveal bookkeeping for observed elements.
#[derive(Debug, Default)]
pub struct RevealTracker {
    states: FnvHashMap<u32, Reveal>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking an element; already tracked elements keep their state.
    pub fn observe(&mut self, id: u32) {
        self.states.entry(id).or_insert(Reveal::Hidden);
    }

    /// Feed one intersection report. Returns `true` exactly once per element:
    /// the first time it intersects while hidden. The caller then shows it
    /// and stops observing.
    pub fn intersected(&mut self, id: u32, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.states.get_mut(&id) {
            Some(state) if *state == Reveal::Hidden => {
                *state = Reveal::Visible;
                true
            }
            _ => false,
        }
    }

    /// Elements still waiting for their first intersection.
    pub fn pending(&self) -> usize {
        self.states.values().filter(|s| **s == Reveal::Hidden).count()
    }
}

/// CSS selector for an in-page anchor `href`, or `None` when there is
/// nothing to scroll to (`"#"` or not a fragment link).
pub fn anchor_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}

/// Outcome of a click on an in-page anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnchorClick<'a> {
    /// Suppress the browser's own jump and hash rewrite.
    pub prevent_default: bool,
    /// Element to scroll into view; a missing target leaves the page as is.
    pub scroll_to: Option<&'a str>,
}

/// Every fragment link is handled in-page, including a bare `"#"`. Anything
/// else is left to the browser.
pub fn anchor_click(href: Option<&str>) -> AnchorClick<'_> {
    let is_fragment = href.is_some_and(|h| h.trim().starts_with('#'));
    AnchorClick {
        prevent_default: is_fragment,
        scroll_to: href.and_then(anchor_selector),
    }
}
