//! # Painter
//!
//! Turns the graph, viewport and interaction state into a [`RenderList`].
//! Draw order: grid, committed wires, preview wire, nodes (list order, so
//! the most recently touched node is on top).

use glam::Vec2;

use crate::config::EditorConfig;
use crate::interaction::Mode;
use crate::math;
use crate::model::{FlowNode, Graph};
use crate::render::{DrawCommand, RenderList};
use crate::view::Viewport;

pub struct Painter;

impl Painter {
    /// Renders one frame of the whole editor.
    pub fn draw_frame(
        view: &Viewport,
        config: &EditorConfig,
        graph: &Graph,
        mode: &Mode,
        screen_size: Vec2,
    ) -> RenderList {
        let mut list = Vec::new();
        let style = &config.style;

        Self::draw_grid(view, config, screen_size, &mut list);

        // Committed wires, behind everything but the grid.
        for edge in &graph.edges {
            let (Some(src), Some(dst)) = (graph.node(edge.source), graph.node(edge.target))
            else {
                continue;
            };
            let (Some(start), Some(end)) = (
                config.output_port_center(src),
                config.input_port_center(dst),
            ) else {
                continue;
            };
            let start = view.canvas_to_screen(start);
            let end = view.canvas_to_screen(end);
            let (cp1, cp2) = math::wire_control_points(start, end);
            list.push(DrawCommand::Bezier {
                start,
                cp1,
                cp2,
                end,
                color: style.wire,
                width: 2.0,
            });
        }

        // Live preview while a connection is being drawn.
        if let Mode::Connecting { source, cursor, .. } = mode
            && let Some(src) = graph.node(*source)
            && let Some(start) = config.output_port_center(src)
        {
            let start = view.canvas_to_screen(start);
            let end = view.canvas_to_screen(*cursor);
            let (cp1, cp2) = math::wire_control_points(start, end);
            list.push(DrawCommand::Bezier {
                start,
                cp1,
                cp2,
                end,
                color: style.wire_preview,
                width: 2.0,
            });
        }

        for node in &graph.nodes {
            Self::draw_node(view, config, graph, mode, node, &mut list);
        }

        list
    }

    fn draw_node(
        view: &Viewport,
        config: &EditorConfig,
        graph: &Graph,
        mode: &Mode,
        node: &FlowNode,
        list: &mut RenderList,
    ) {
        let style = &config.style;
        let zoom = view.zoom;
        let pos = view.canvas_to_screen(node.position);
        let size = config.node_size * zoom;
        let selected = graph.selected == Some(node.id);

        list.push(DrawCommand::Rect {
            pos,
            size,
            color: style.node_fill,
            corner_radius: 6.0 * zoom,
            stroke_width: if selected { 2.0 } else { 1.0 },
            stroke_color: Some(if selected {
                style.selection_border
            } else {
                style.node_border
            }),
        });

        // Header band: icon + label + delete affordance.
        list.push(DrawCommand::Rect {
            pos,
            size: Vec2::new(size.x, config.header_height * zoom),
            color: style.header_fill,
            corner_radius: 6.0 * zoom,
            stroke_width: 0.0,
            stroke_color: None,
        });
        list.push(DrawCommand::Text {
            pos: pos + Vec2::new(8.0, 7.0) * zoom,
            text: format!("{} {}", node.body.icon(), node.body.label()),
            color: style.header_text,
            size: 13.0 * zoom,
        });
        let delete_pos = view.canvas_to_screen(config.delete_rect(node).min);
        list.push(DrawCommand::Text {
            pos: delete_pos,
            text: "✕".into(),
            color: style.body_text,
            size: 12.0 * zoom,
        });

        // Body preview.
        list.push(DrawCommand::Text {
            pos: pos + Vec2::new(8.0, config.header_height + 12.0) * zoom,
            text: node.body.preview(),
            color: style.body_text,
            size: 11.0 * zoom,
        });

        // Ports, tinted while a connection gesture involves them.
        if let Some(center) = config.input_port_center(node) {
            let is_target = matches!(mode, Mode::Connecting { target, .. } if *target == Some(node.id));
            list.push(DrawCommand::Circle {
                center: view.canvas_to_screen(center),
                radius: config.port_radius * zoom,
                color: if is_target {
                    style.port_target
                } else {
                    style.port
                },
                stroke_color: Some(style.node_border),
            });
        }
        if let Some(center) = config.output_port_center(node) {
            let is_active = matches!(mode, Mode::Connecting { source, .. } if *source == node.id);
            list.push(DrawCommand::Circle {
                center: view.canvas_to_screen(center),
                radius: config.port_radius * zoom,
                color: if is_active {
                    style.port_active
                } else {
                    style.port
                },
                stroke_color: Some(style.node_border),
            });
        }
    }

    /// Background grid over the visible canvas region.
    fn draw_grid(view: &Viewport, config: &EditorConfig, screen_size: Vec2, list: &mut RenderList) {
        let spacing = config.grid_spacing;
        let top_left = view.screen_to_canvas(Vec2::ZERO);
        let bottom_right = view.screen_to_canvas(screen_size);

        let start_x = (top_left.x / spacing).floor() * spacing;
        let start_y = (top_left.y / spacing).floor() * spacing;

        let mut x = start_x;
        while x <= bottom_right.x {
            list.push(DrawCommand::Line {
                start: view.canvas_to_screen(Vec2::new(x, top_left.y)),
                end: view.canvas_to_screen(Vec2::new(x, bottom_right.y)),
                color: config.style.grid,
                width: 1.0,
            });
            x += spacing;
        }
        let mut y = start_y;
        while y <= bottom_right.y {
            list.push(DrawCommand::Line {
                start: view.canvas_to_screen(Vec2::new(top_left.x, y)),
                end: view.canvas_to_screen(Vec2::new(bottom_right.x, y)),
                color: config.style.grid,
                width: 1.0,
            });
            y += spacing;
        }
    }
}
