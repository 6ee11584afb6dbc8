//! # Viewport
//!
//! Pan/zoom camera mapping canvas (graph) coordinates to screen pixels.
//! Every coordinate conversion in the editor goes through this one struct,
//! with one convention: `screen = canvas * zoom + pan`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f32 = 0.3;
pub const MAX_ZOOM: f32 = 2.0;
pub const ZOOM_STEP: f32 = 0.1;

/// The camera state. Zoom is clamped to `[MIN_ZOOM, MAX_ZOOM]`; pan is
/// unbounded. Neither is persisted with the graph.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Viewport {
    pub pan: Vec2,
    pub zoom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    /// `canvas = (screen - pan) / zoom`
    pub fn screen_to_canvas(&self, screen: Vec2) -> Vec2 {
        (screen - self.pan) / self.zoom
    }

    /// `screen = canvas * zoom + pan`
    pub fn canvas_to_screen(&self, canvas: Vec2) -> Vec2 {
        canvas * self.zoom + self.pan
    }

    /// Sets the zoom factor, clamped to the allowed range.
    pub fn set_zoom(&mut self, value: f32) {
        self.zoom = value.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    /// Accumulates a pan delta in screen pixels.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Back to zoom 1, pan (0,0). Called when a new or different flow is
    /// loaded.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
