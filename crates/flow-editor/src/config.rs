//! # Configuration
//!
//! Tunables for node layout, hit-testing and visual style, plus the shared
//! node geometry helpers (port centers, header rects) that interaction and
//! painting both rely on.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

use crate::math::Rect;
use crate::model::FlowNode;

/// Editor configuration. All distances are in canvas units unless noted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Fixed size of a node block.
    pub node_size: Vec2,
    /// Height of the node header band.
    pub header_height: f32,
    /// Visual radius of a port dot.
    pub port_radius: f32,
    /// Hit radius around a port center, in screen pixels (rescaled by zoom
    /// when testing in canvas space).
    pub port_hit_radius: f32,
    /// Hit distance around a wire, in screen pixels.
    pub edge_hit_radius: f32,
    /// Background grid spacing.
    pub grid_spacing: f32,
    /// Visual styling.
    #[serde(default)]
    pub style: EditorStyle,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            node_size: Vec2::new(180.0, 80.0),
            header_height: 28.0,
            port_radius: 6.0,
            port_hit_radius: 10.0,
            edge_hit_radius: 6.0,
            grid_spacing: 100.0,
            style: EditorStyle::default(),
        }
    }
}

impl EditorConfig {
    /// Bounding box of a node in canvas space.
    pub fn node_rect(&self, node: &FlowNode) -> Rect {
        Rect::new(node.position, self.node_size)
    }

    /// Canvas-space center of the input port, if the node's type has one.
    /// Input ports sit at the left-center of the block.
    pub fn input_port_center(&self, node: &FlowNode) -> Option<Vec2> {
        node.body
            .has_input()
            .then(|| node.position + Vec2::new(0.0, self.node_size.y * 0.5))
    }

    /// Canvas-space center of the output port, if the node's type has one.
    /// Output ports sit at the right-center of the block.
    pub fn output_port_center(&self, node: &FlowNode) -> Option<Vec2> {
        node.body
            .has_output()
            .then(|| node.position + Vec2::new(self.node_size.x, self.node_size.y * 0.5))
    }

    /// Canvas-space rect of the header delete affordance.
    pub fn delete_rect(&self, node: &FlowNode) -> Rect {
        let size = Vec2::splat(16.0);
        let pos = node.position + Vec2::new(self.node_size.x - size.x - 6.0, 6.0);
        Rect::new(pos, size)
    }
}

/// RGBA colors used by the painter.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EditorStyle {
    pub background: Vec4,
    pub grid: Vec4,
    pub node_fill: Vec4,
    pub node_border: Vec4,
    pub header_fill: Vec4,
    pub header_text: Vec4,
    pub body_text: Vec4,
    pub selection_border: Vec4,
    pub wire: Vec4,
    pub wire_preview: Vec4,
    pub port: Vec4,
    /// Output port of the connection being drawn.
    pub port_active: Vec4,
    /// Input port currently marked as a valid drop target.
    pub port_target: Vec4,
}

impl Default for EditorStyle {
    fn default() -> Self {
        Self {
            background: Vec4::new(0.09, 0.10, 0.12, 1.0),
            grid: Vec4::new(0.16, 0.17, 0.20, 1.0),
            node_fill: Vec4::new(0.15, 0.16, 0.19, 1.0),
            node_border: Vec4::new(0.35, 0.37, 0.42, 1.0),
            header_fill: Vec4::new(0.20, 0.22, 0.26, 1.0),
            header_text: Vec4::new(0.95, 0.95, 0.95, 1.0),
            body_text: Vec4::new(0.70, 0.72, 0.76, 1.0),
            selection_border: Vec4::new(0.25, 0.65, 0.40, 1.0),
            wire: Vec4::new(0.55, 0.58, 0.64, 1.0),
            wire_preview: Vec4::new(0.95, 0.95, 0.95, 1.0),
            port: Vec4::new(0.65, 0.67, 0.72, 1.0),
            port_active: Vec4::new(0.25, 0.65, 0.40, 1.0),
            port_target: Vec4::new(0.30, 0.75, 0.95, 1.0),
        }
    }
}
