//! Geometry helpers: rectangles and the connection wire curve.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Minimum horizontal control-point offset of a wire, in screen pixels.
/// Keeps a visible curve even when the two ports are vertically stacked.
const MIN_CONTROL_OFFSET: f32 = 40.0;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Control points of the cubic "S-curve" connecting `start` to `end`,
/// assuming left-to-right flow: `(x1 + off, y1)` and `(x2 - off, y2)` with
/// `off = max(|x2 - x1| * 0.5, 40)`.
pub fn wire_control_points(start: Vec2, end: Vec2) -> (Vec2, Vec2) {
    let offset = ((end.x - start.x).abs() * 0.5).max(MIN_CONTROL_OFFSET);
    let cp1 = start + Vec2::new(offset, 0.0);
    let cp2 = end - Vec2::new(offset, 0.0);
    (cp1, cp2)
}

/// Point on the cubic at parameter `t`.
fn cubic_point(start: Vec2, cp1: Vec2, cp2: Vec2, end: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    start * (u * u * u) + cp1 * (3.0 * u * u * t) + cp2 * (3.0 * u * t * t) + end * (t * t * t)
}

/// Approximate distance from `p` to the wire between `start` and `end`,
/// by sampling the curve. Used for edge click hit-testing, where a few
/// tenths of a pixel of error is irrelevant.
pub fn distance_to_wire(p: Vec2, start: Vec2, end: Vec2) -> f32 {
    const SAMPLES: u32 = 32;
    let (cp1, cp2) = wire_control_points(start, end);
    let mut best = f32::INFINITY;
    let mut prev = start;
    for i in 1..=SAMPLES {
        let t = i as f32 / SAMPLES as f32;
        let next = cubic_point(start, cp1, cp2, end, t);
        best = best.min(distance_to_segment(p, prev, next));
        prev = next;
    }
    best
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
