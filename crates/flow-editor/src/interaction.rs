//! # Interaction State Machine
//!
//! Node dragging, canvas panning and connection drawing, driven by the
//! per-frame [`InputState`]. The three interactions are mutually exclusive
//! by construction: each is a [`Mode`] variant and every transition goes
//! through `Idle` (except pan, which force-cancels an in-progress
//! connection).

use glam::Vec2;

use crate::config::EditorConfig;
use crate::input::InputState;
use crate::math;
use crate::model::{Graph, NodeId};
use crate::view::Viewport;

/// Events emitted to the host application.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// A node was selected (also re-emitted when selection switches).
    NodeSelected(NodeId),
    /// The selection was cleared by clicking empty canvas.
    SelectionCleared,
    /// An edge was committed through a connection gesture.
    Connected { source: NodeId, target: NodeId },
    /// A committed edge was clicked. The host should confirm with the
    /// operator and call `Graph::remove_edge` if accepted.
    EdgeClicked { source: NodeId, target: NodeId },
    /// The header delete affordance of a node was clicked. The host should
    /// call `Editor::remove_node`.
    DeleteClicked(NodeId),
    /// Something visible changed; redraw.
    Repaint,
}

/// Current interaction mode.
#[derive(Clone, Debug)]
pub enum Mode {
    Idle,
    /// Primary button held on a node body.
    DraggingNode {
        id: NodeId,
        /// Canvas-space offset between the pointer and the node origin at
        /// grab time, so the node does not jump under the cursor.
        grab_offset: Vec2,
    },
    /// Secondary button held anywhere.
    Panning {
        start_mouse: Vec2,
        start_pan: Vec2,
    },
    /// Primary button held after pressing an output port.
    Connecting {
        source: NodeId,
        /// Canvas-space far endpoint of the preview wire.
        cursor: Vec2,
        /// Node whose input port is currently a valid drop target.
        target: Option<NodeId>,
    },
    /// A press whose click was already handled (edge, delete glyph, input
    /// port, empty canvas). Swallows the held button until release so one
    /// physical click fires its event exactly once.
    PressHeld,
}

/// Advances the state machine by one frame.
pub fn handle(
    mode: &mut Mode,
    view: &mut Viewport,
    config: &EditorConfig,
    input: &InputState,
    graph: &mut Graph,
    events: &mut Vec<Event>,
) {
    // Wheel zoom works in every mode and changes none of them.
    if input.wheel_delta != 0.0 {
        if input.wheel_delta > 0.0 {
            view.zoom_in();
        } else {
            view.zoom_out();
        }
        events.push(Event::Repaint);
    }

    let next = match mode {
        Mode::Idle => handle_idle(view, config, input, graph, events),
        Mode::DraggingNode { id, grab_offset } => {
            handle_dragging(view, input, graph, *id, *grab_offset, events)
        }
        Mode::Panning {
            start_mouse,
            start_pan,
        } => handle_panning(view, input, *start_mouse, *start_pan, events),
        Mode::Connecting {
            source,
            cursor,
            target,
        } => handle_connecting(view, config, input, graph, *source, cursor, target, events),
        Mode::PressHeld => handle_press_held(input),
    };

    if let Some(new_mode) = next {
        *mode = new_mode;
    }
}

/// Hit radius around a port in canvas units at the current zoom.
fn port_hit_radius(config: &EditorConfig, view: &Viewport) -> f32 {
    (config.port_hit_radius / view.zoom).max(5.0)
}

/// Front-to-back search for a port under `canvas_pos`.
/// Returns `(node, is_output)`.
fn hit_port(
    graph: &Graph,
    config: &EditorConfig,
    canvas_pos: Vec2,
    radius: f32,
) -> Option<(NodeId, bool)> {
    for node in graph.nodes.iter().rev() {
        if let Some(center) = config.output_port_center(node)
            && center.distance(canvas_pos) <= radius
        {
            return Some((node.id, true));
        }
        if let Some(center) = config.input_port_center(node)
            && center.distance(canvas_pos) <= radius
        {
            return Some((node.id, false));
        }
    }
    None
}

fn handle_idle(
    view: &Viewport,
    config: &EditorConfig,
    input: &InputState,
    graph: &mut Graph,
    events: &mut Vec<Event>,
) -> Option<Mode> {
    let canvas_mouse = view.screen_to_canvas(input.mouse_pos);

    if input.buttons.secondary {
        // Panning starts on empty canvas only; a press on a node body is
        // swallowed.
        if graph
            .nodes
            .iter()
            .any(|node| config.node_rect(node).contains(canvas_mouse))
        {
            return Some(Mode::PressHeld);
        }
        return Some(Mode::Panning {
            start_mouse: input.mouse_pos,
            start_pan: view.pan,
        });
    }

    if !input.buttons.primary {
        return None;
    }

    // Ports take priority over node bodies.
    if let Some((node_id, is_output)) = hit_port(graph, config, canvas_mouse, port_hit_radius(config, view))
    {
        if is_output {
            return Some(Mode::Connecting {
                source: node_id,
                cursor: canvas_mouse,
                target: None,
            });
        }
        // Pressing an input port starts nothing.
        return Some(Mode::PressHeld);
    }

    // Node bodies, front to back.
    for idx in (0..graph.nodes.len()).rev() {
        let node = &graph.nodes[idx];
        if !config.node_rect(node).contains(canvas_mouse) {
            continue;
        }
        let id = node.id;
        if config.delete_rect(node).contains(canvas_mouse) {
            events.push(Event::DeleteClicked(id));
            return Some(Mode::PressHeld);
        }
        let grab_offset = canvas_mouse - node.position;
        graph.select(id);
        graph.bring_to_front(id);
        events.push(Event::NodeSelected(id));
        events.push(Event::Repaint);
        return Some(Mode::DraggingNode { id, grab_offset });
    }

    // Committed edges (rendered behind nodes, so tested after them).
    for edge in &graph.edges {
        let (Some(src), Some(dst)) = (graph.node(edge.source), graph.node(edge.target)) else {
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
        if math::distance_to_wire(input.mouse_pos, start, end) <= config.edge_hit_radius {
            events.push(Event::EdgeClicked {
                source: edge.source,
                target: edge.target,
            });
            return Some(Mode::PressHeld);
        }
    }

    // Empty canvas clears the selection.
    if graph.selected.is_some() {
        graph.clear_selection();
        events.push(Event::SelectionCleared);
        events.push(Event::Repaint);
    }
    Some(Mode::PressHeld)
}

fn handle_press_held(input: &InputState) -> Option<Mode> {
    if input.buttons.primary || input.buttons.secondary {
        return None;
    }
    Some(Mode::Idle)
}

fn handle_dragging(
    view: &Viewport,
    input: &InputState,
    graph: &mut Graph,
    id: NodeId,
    grab_offset: Vec2,
    events: &mut Vec<Event>,
) -> Option<Mode> {
    if !input.buttons.primary {
        return Some(Mode::Idle);
    }
    let Some(node) = graph.node_mut(id) else {
        // Node deleted out from under the drag.
        return Some(Mode::Idle);
    };
    node.position = view.screen_to_canvas(input.mouse_pos) - grab_offset;
    events.push(Event::Repaint);
    None
}

fn handle_panning(
    view: &mut Viewport,
    input: &InputState,
    start_mouse: Vec2,
    start_pan: Vec2,
    events: &mut Vec<Event>,
) -> Option<Mode> {
    if !input.buttons.secondary {
        return Some(Mode::Idle);
    }
    view.pan = start_pan + (input.mouse_pos - start_mouse);
    events.push(Event::Repaint);
    None
}

#[allow(clippy::too_many_arguments)]
fn handle_connecting(
    view: &Viewport,
    config: &EditorConfig,
    input: &InputState,
    graph: &mut Graph,
    source: NodeId,
    cursor: &mut Vec2,
    target: &mut Option<NodeId>,
    events: &mut Vec<Event>,
) -> Option<Mode> {
    // Panning cancels the connection in progress.
    if input.buttons.secondary {
        return Some(Mode::Panning {
            start_mouse: input.mouse_pos,
            start_pan: view.pan,
        });
    }

    let canvas_mouse = view.screen_to_canvas(input.mouse_pos);
    *cursor = canvas_mouse;

    // A valid drop target is an input port on a node other than the source.
    let radius = port_hit_radius(config, view);
    let hovered = graph.nodes.iter().rev().find_map(|node| {
        if node.id == source {
            return None;
        }
        let center = config.input_port_center(node)?;
        (center.distance(canvas_mouse) <= radius).then_some(node.id)
    });
    if *target != hovered {
        *target = hovered;
    }
    events.push(Event::Repaint);

    if !input.buttons.primary {
        if let Some(target_id) = *target {
            let before = graph.edges.len();
            graph.add_edge(source, target_id);
            if graph.edges.len() > before {
                events.push(Event::Connected {
                    source,
                    target: target_id,
                });
            }
        }
        return Some(Mode::Idle);
    }
    None
}
