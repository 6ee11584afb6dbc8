//! # flow_editor
//!
//! Headless interactive editor for WhatsApp automation flows: a directed
//! graph of typed nodes (trigger, message, wait, condition, delay,
//! transfer, tag, status, webhook, end) edited with drag-and-drop,
//! pan/zoom and port-to-port connection gestures.
//!
//! The crate owns state, mathematics and interaction logic and delegates
//! rendering to the host application:
//! - **Model (`model`)**: the graph (nodes, edges, selection).
//! - **View (`view`)**: coordinate transforms (canvas <-> screen).
//! - **Interaction (`interaction`)**: the pointer-driven state machine.
//! - **Painter (`painter`/`render`)**: emits a `DrawCommand` list per frame.
//! - **Forms (`forms`)**: headless per-type property panel.
//!
//! The host feeds an [`InputState`] each frame into [`Editor::update`] and
//! renders the returned display list.

pub mod config;
pub mod forms;
pub mod input;
pub mod interaction;
pub mod math;
pub mod model;
pub mod painter;
pub mod render;
pub mod view;

pub use config::EditorConfig;
pub use input::InputState;
pub use interaction::{Event, Mode};
pub use model::{Branch, Edge, FlowNode, Graph, NodeBody, NodeId, NodeKind, PipelineStage};
pub use render::{DrawCommand, RenderList};
pub use view::Viewport;

use painter::Painter;

/// One editing session: configuration, viewport and interaction mode.
///
/// The graph is passed into [`Editor::update`] rather than owned, so a host
/// can swap graphs (load/new flow) without tearing down the editor, and
/// several independent editors can coexist in one process.
pub struct Editor {
    pub config: EditorConfig,
    pub view: Viewport,
    pub mode: Mode,
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            view: Viewport::default(),
            mode: Mode::Idle,
        }
    }

    /// Processes one frame of input and returns the draw list plus any
    /// events for the host.
    pub fn update(&mut self, input: &InputState, graph: &mut Graph) -> (RenderList, Vec<Event>) {
        let mut events = Vec::new();
        interaction::handle(
            &mut self.mode,
            &mut self.view,
            &self.config,
            input,
            graph,
            &mut events,
        );
        let list = Painter::draw_frame(&self.view, &self.config, graph, &self.mode, input.screen_size);
        (list, events)
    }

    /// Deletes a node, first cancelling any in-progress drag or connection
    /// that references it so no interaction state dangles.
    pub fn remove_node(&mut self, graph: &mut Graph, id: NodeId) {
        match &self.mode {
            Mode::DraggingNode { id: dragged, .. } if *dragged == id => self.mode = Mode::Idle,
            Mode::Connecting { source, .. } if *source == id => self.mode = Mode::Idle,
            _ => {}
        }
        graph.remove_node(id);
    }

    /// Discards the current flow: clears the graph, resets the viewport and
    /// drops any interaction in progress.
    pub fn new_flow(&mut self, graph: &mut Graph) {
        graph.reset();
        self.view.reset();
        self.mode = Mode::Idle;
    }
}
