//! Latest pointer, scroll and viewport readings.
//!
//! Input callbacks write here and the frame update reads a copy. There is no
//! queue: the last event before a frame wins.

use crate::state::Viewport;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    /// Raw pointer offset from the viewport centre, in CSS pixels.
    pub offset: Vec2,
    /// Pointer in normalized device coordinates (`-1..1`, y up).
    pub cursor_ndc: Vec2,
    /// Vertical document scroll, in CSS pixels.
    pub scroll: f32,
    pub viewport: Viewport,
}

impl InputState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub fn pointer_moved(&mut self, client_x: f32, client_y: f32) {
        if !(client_x.is_finite() && client_y.is_finite()) || self.viewport.is_empty() {
            return;
        }
        let half = self.viewport.half();
        self.offset = Vec2::new(client_x - half.x, client_y - half.y);
        self.cursor_ndc = Vec2::new(
            (client_x / self.viewport.width) * 2.0 - 1.0,
            -(client_y / self.viewport.height) * 2.0 + 1.0,
        );
    }

    pub fn scrolled(&mut self, scroll_y: f32) {
        if scroll_y.is_finite() {
            self.scroll = scroll_y;
        }
    }

    /// Returns `false` (and keeps the old viewport) for empty sizes.
    pub fn resized(&mut self, viewport: Viewport) -> bool {
        if viewport.is_empty() {
            return false;
        }
        self.viewport = viewport;
        true
    }
}
