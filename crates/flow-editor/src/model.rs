//! # Graph Data Model
//!
//! The canonical in-memory representation of a flow: typed nodes, directed
//! edges and the (transient) selection. The in-memory shape is also the wire
//! shape, so the persistence layer serializes these structs as-is.
//!
//! Node payloads are a tagged union (`NodeBody`), so every consumer that
//! matches on a node is forced by the compiler to handle all ten variants.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier for a node, unique across editing sessions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Generates a fresh id.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The closed set of node types an operator can place on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Trigger,
    Message,
    Wait,
    Condition,
    Delay,
    Transfer,
    Tag,
    Status,
    Webhook,
    End,
}

impl NodeKind {
    /// Wire name of the kind (matches the serde tag).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trigger => "trigger",
            Self::Message => "message",
            Self::Wait => "wait",
            Self::Condition => "condition",
            Self::Delay => "delay",
            Self::Transfer => "transfer",
            Self::Tag => "tag",
            Self::Status => "status",
            Self::Webhook => "webhook",
            Self::End => "end",
        }
    }
}

/// One branch of a condition node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    /// The value this branch compares the incoming message against.
    #[serde(default)]
    pub value: String,
    /// Node to jump to when the branch matches.
    #[serde(default)]
    pub target: Option<NodeId>,
}

/// Pipeline stage written by a `status` node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    #[default]
    Novo,
    Atendimento,
    Ganho,
    Perdido,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 4] = [
        Self::Novo,
        Self::Atendimento,
        Self::Ganho,
        Self::Perdido,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Novo => "novo",
            Self::Atendimento => "atendimento",
            Self::Ganho => "ganho",
            Self::Perdido => "perdido",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| stage.as_str() == s)
    }

    /// Human-readable stage name shown in the status select.
    pub fn display(self) -> &'static str {
        match self {
            Self::Novo => "Novo",
            Self::Atendimento => "Em atendimento",
            Self::Ganho => "Ganho",
            Self::Perdido => "Perdido",
        }
    }
}

fn default_wait_timeout() -> u32 {
    60
}

fn default_delay_seconds() -> u32 {
    5
}

/// Type-specific payload of a node.
///
/// Serializes adjacently tagged so a node carries `"type": "message"` next to
/// a `"data": {...}` object, which is exactly the persisted representation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum NodeBody {
    Trigger {
        label: String,
        #[serde(default)]
        keyword: String,
    },
    Message {
        label: String,
        #[serde(default)]
        content: String,
    },
    Wait {
        label: String,
        #[serde(default = "default_wait_timeout")]
        timeout: u32,
    },
    Condition {
        label: String,
        #[serde(default)]
        conditions: Vec<Branch>,
    },
    Delay {
        label: String,
        #[serde(default = "default_delay_seconds")]
        seconds: u32,
    },
    Transfer {
        label: String,
        #[serde(default)]
        message: String,
    },
    Tag {
        label: String,
        #[serde(default)]
        tag: String,
    },
    Status {
        label: String,
        #[serde(default)]
        status: PipelineStage,
    },
    Webhook {
        label: String,
        #[serde(default)]
        url: String,
    },
    End {
        label: String,
    },
}

impl NodeBody {
    /// Default payload for a freshly dropped palette node.
    pub fn new(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Trigger => Self::Trigger {
                label: "Gatilho".into(),
                keyword: String::new(),
            },
            NodeKind::Message => Self::Message {
                label: "Mensagem".into(),
                content: "Olá! Como posso ajudar?".into(),
            },
            NodeKind::Wait => Self::Wait {
                label: "Aguardar resposta".into(),
                timeout: default_wait_timeout(),
            },
            NodeKind::Condition => Self::Condition {
                label: "Condição".into(),
                conditions: Vec::new(),
            },
            NodeKind::Delay => Self::Delay {
                label: "Atraso".into(),
                seconds: default_delay_seconds(),
            },
            NodeKind::Transfer => Self::Transfer {
                label: "Transferir".into(),
                message: String::new(),
            },
            NodeKind::Tag => Self::Tag {
                label: "Adicionar tag".into(),
                tag: String::new(),
            },
            NodeKind::Status => Self::Status {
                label: "Mudar status".into(),
                status: PipelineStage::default(),
            },
            NodeKind::Webhook => Self::Webhook {
                label: "Webhook".into(),
                url: String::new(),
            },
            NodeKind::End => Self::End {
                label: "Fim".into(),
            },
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Trigger { .. } => NodeKind::Trigger,
            Self::Message { .. } => NodeKind::Message,
            Self::Wait { .. } => NodeKind::Wait,
            Self::Condition { .. } => NodeKind::Condition,
            Self::Delay { .. } => NodeKind::Delay,
            Self::Transfer { .. } => NodeKind::Transfer,
            Self::Tag { .. } => NodeKind::Tag,
            Self::Status { .. } => NodeKind::Status,
            Self::Webhook { .. } => NodeKind::Webhook,
            Self::End { .. } => NodeKind::End,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Trigger { label, .. }
            | Self::Message { label, .. }
            | Self::Wait { label, .. }
            | Self::Condition { label, .. }
            | Self::Delay { label, .. }
            | Self::Transfer { label, .. }
            | Self::Tag { label, .. }
            | Self::Status { label, .. }
            | Self::Webhook { label, .. }
            | Self::End { label } => label,
        }
    }

    pub fn set_label(&mut self, value: String) {
        match self {
            Self::Trigger { label, .. }
            | Self::Message { label, .. }
            | Self::Wait { label, .. }
            | Self::Condition { label, .. }
            | Self::Delay { label, .. }
            | Self::Transfer { label, .. }
            | Self::Tag { label, .. }
            | Self::Status { label, .. }
            | Self::Webhook { label, .. }
            | Self::End { label } => *label = value,
        }
    }

    /// Whether this node accepts incoming edges. Triggers are entry points
    /// and have no input port.
    pub fn has_input(&self) -> bool {
        !matches!(self, Self::Trigger { .. })
    }

    /// Whether this node can originate edges. End nodes are terminal.
    pub fn has_output(&self) -> bool {
        !matches!(self, Self::End { .. })
    }

    /// Icon glyph shown in the node header.
    pub fn icon(&self) -> &'static str {
        match self.kind() {
            NodeKind::Trigger => "⚡",
            NodeKind::Message => "💬",
            NodeKind::Wait => "⏳",
            NodeKind::Condition => "🔀",
            NodeKind::Delay => "⏱",
            NodeKind::Transfer => "👤",
            NodeKind::Tag => "🏷",
            NodeKind::Status => "📊",
            NodeKind::Webhook => "🔗",
            NodeKind::End => "🏁",
        }
    }

    /// Short per-type summary rendered in the node body.
    pub fn preview(&self) -> String {
        match self {
            Self::Trigger { keyword, .. } => {
                if keyword.trim().is_empty() {
                    "Qualquer mensagem".into()
                } else {
                    format!("Palavra-chave: {keyword}")
                }
            }
            Self::Message { content, .. } => {
                if content.is_empty() {
                    "Sem conteúdo".into()
                } else if content.chars().count() > 50 {
                    let cut: String = content.chars().take(50).collect();
                    format!("{cut}…")
                } else {
                    content.clone()
                }
            }
            Self::Wait { timeout, .. } => format!("Aguardar resposta ({timeout}s)"),
            Self::Condition { conditions, .. } => match conditions.len() {
                1 => "1 condição".into(),
                n => format!("{n} condições"),
            },
            Self::Delay { seconds, .. } => format!("Aguardar {seconds}s"),
            Self::Transfer { .. } => "Transferir para atendente".into(),
            Self::Tag { tag, .. } => {
                if tag.trim().is_empty() {
                    "Sem tag".into()
                } else {
                    format!("Tag: {tag}")
                }
            }
            Self::Status { status, .. } => format!("Status: {}", status.display()),
            Self::Webhook { url, .. } => {
                if url.trim().is_empty() {
                    "Sem URL".into()
                } else {
                    url.clone()
                }
            }
            Self::End { .. } => "Fim do fluxo".into(),
        }
    }
}

/// A node placed on the canvas. `position` is in canvas (graph) space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: NodeId,
    #[serde(flatten)]
    pub body: NodeBody,
    /// Optional refinement of the type, e.g. a trigger's `keyword` vs
    /// `new_contact` variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(with = "xy")]
    pub position: Vec2,
}

/// Serializes a position as the wire's `{"x": .., "y": ..}` object instead
/// of glam's default `[x, y]` tuple.
mod xy {
    use glam::Vec2;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Xy {
        x: f32,
        y: f32,
    }

    pub fn serialize<S: Serializer>(v: &Vec2, serializer: S) -> Result<S::Ok, S::Error> {
        Xy { x: v.x, y: v.y }.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec2, D::Error> {
        let Xy { x, y } = Xy::deserialize(deserializer)?;
        Ok(Vec2::new(x, y))
    }
}

/// A directed link from one node's output port to another node's input port.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

/// The whole editable graph plus the current selection.
///
/// Node order doubles as draw order: later entries render on top.
/// Selection is UI state and is never serialized.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<Edge>,
    #[serde(skip)]
    pub selected: Option<NodeId>,
}

impl Graph {
    /// Creates a node with type defaults at `position` and appends it.
    pub fn add_node(&mut self, kind: NodeKind, subtype: Option<String>, position: Vec2) -> NodeId {
        let node = FlowNode {
            id: NodeId::fresh(),
            body: NodeBody::new(kind),
            subtype,
            position,
        };
        let id = node.id;
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut FlowNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Removes the node, every edge touching it, and the selection if it
    /// pointed at it.
    pub fn remove_node(&mut self, id: NodeId) {
        self.nodes.retain(|n| n.id != id);
        self.edges.retain(|e| e.source != id && e.target != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
    }

    /// Appends a directed edge. Silently refuses self-loops, duplicate
    /// ordered pairs, unknown endpoints, and port-illegal pairs (a source
    /// with no output port or a target with no input port). These are
    /// benign gesture misses, not errors.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) {
        if source == target {
            return;
        }
        let (Some(src), Some(dst)) = (self.node(source), self.node(target)) else {
            return;
        };
        if !src.body.has_output() || !dst.body.has_input() {
            return;
        }
        if self
            .edges
            .iter()
            .any(|e| e.source == source && e.target == target)
        {
            return;
        }
        self.edges.push(Edge { source, target });
    }

    pub fn remove_edge(&mut self, source: NodeId, target: NodeId) {
        self.edges
            .retain(|e| !(e.source == source && e.target == target));
    }

    /// Selects `id` if present; no-ops otherwise.
    pub fn select(&mut self, id: NodeId) {
        if self.contains(id) {
            self.selected = Some(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Moves `id` to the end of the node list so it draws on top.
    pub fn bring_to_front(&mut self, id: NodeId) {
        if let Some(idx) = self.nodes.iter().position(|n| n.id == id) {
            let node = self.nodes.remove(idx);
            self.nodes.push(node);
        }
    }

    /// Clears nodes, edges and selection. Used for "new flow" and before
    /// hydrating a loaded one.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.selected = None;
    }

    /// Replaces the node/edge lists wholesale. Endpoint integrity is the
    /// persistence layer's responsibility.
    pub fn hydrate(&mut self, nodes: Vec<FlowNode>, edges: Vec<Edge>) {
        self.nodes = nodes;
        self.edges = edges;
        self.selected = None;
    }

    /// First trigger node in the graph, if any.
    pub fn trigger(&self) -> Option<&FlowNode> {
        self.nodes
            .iter()
            .find(|n| matches!(n.body, NodeBody::Trigger { .. }))
    }
}
