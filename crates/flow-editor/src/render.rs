//! # Display List
//!
//! The editor never draws pixels. Each frame it emits a flat list of
//! [`DrawCommand`]s in screen space; the host (an SVG tree, a canvas, a
//! retained-mode toolkit) interprets them however it likes.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// A single drawing primitive. Coordinates are in screen pixels.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled rounded rectangle with an optional stroke.
    Rect {
        pos: Vec2,
        size: Vec2,
        color: Vec4,
        corner_radius: f32,
        stroke_width: f32,
        stroke_color: Option<Vec4>,
    },
    /// Straight line segment (grid lines).
    Line {
        start: Vec2,
        end: Vec2,
        color: Vec4,
        width: f32,
    },
    /// Text run; layout is the host's problem.
    Text {
        pos: Vec2,
        text: String,
        color: Vec4,
        size: f32,
    },
    /// Cubic Bezier wire.
    Bezier {
        start: Vec2,
        cp1: Vec2,
        cp2: Vec2,
        end: Vec2,
        color: Vec4,
        width: f32,
    },
    /// Filled circle (port dots).
    Circle {
        center: Vec2,
        radius: f32,
        color: Vec4,
        stroke_color: Option<Vec4>,
    },
}

/// The draw commands for one frame.
pub type RenderList = Vec<DrawCommand>;
