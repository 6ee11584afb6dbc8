//! # Wire Types
//!
//! Serde types for the `/flows` REST API. The node/edge shapes are
//! `flow_editor`'s own structs (the editor's in-memory format is the wire
//! format), so there is no DTO translation layer here.
//!
//! Loaded data is trusted as little as possible: list fields default to
//! empty so a flow with missing `edges` still hydrates its nodes.

use flow_editor::{Edge, FlowNode};
use serde::{Deserialize, Serialize};

/// One row of the flow picker.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlowSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub trigger_type: String,
    /// Servers report either a node count or the inline node list.
    #[serde(default)]
    pub nodes: NodeCount,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeCount {
    Count(u32),
    Inline(Vec<serde_json::Value>),
}

impl NodeCount {
    pub fn len(&self) -> usize {
        match self {
            Self::Count(n) => *n as usize,
            Self::Inline(nodes) => nodes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for NodeCount {
    fn default() -> Self {
        Self::Count(0)
    }
}

/// A full persisted flow.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlowDoc {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<FlowNode>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// Body of `POST /flows` and `PUT /flows/:id`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SavePayload {
    pub name: String,
    pub description: String,
    pub trigger_type: String,
    pub trigger_value: String,
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<Edge>,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub flows: Vec<FlowSummary>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FlowResponse {
    #[serde(default)]
    pub success: bool,
    pub flow: Option<FlowDoc>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SavedFlow {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SaveResponse {
    #[serde(default)]
    pub success: bool,
    pub flow: Option<SavedFlow>,
    #[serde(default)]
    pub error: Option<String>,
}
