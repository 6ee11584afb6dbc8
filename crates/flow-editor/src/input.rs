//! # Input Protocol
//!
//! Per-frame pointer state the host application feeds into the editor.
//! The primary button drags nodes and draws connections, the secondary
//! button pans, and the wheel zooms.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// State of the pointer buttons.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct MouseButtons {
    /// Primary button is pressed.
    pub primary: bool,
    /// Secondary button is pressed.
    pub secondary: bool,
}

/// The input state for a single frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InputState {
    /// Pointer position in screen pixels, relative to the canvas container.
    pub mouse_pos: Vec2,
    pub buttons: MouseButtons,
    /// Wheel delta this frame (positive = zoom in).
    pub wheel_delta: f32,
    /// Size of the canvas viewport in screen pixels.
    pub screen_size: Vec2,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            mouse_pos: Vec2::ZERO,
            buttons: MouseButtons::default(),
            wheel_delta: 0.0,
            screen_size: Vec2::new(1280.0, 720.0),
        }
    }
}
