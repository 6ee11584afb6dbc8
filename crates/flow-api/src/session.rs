//! # Flow Session
//!
//! Binds an editing session (graph + viewport) to a persisted flow:
//! create-vs-update bookkeeping, trigger derivation, local save validation
//! and defensive hydration of loaded data.

use std::collections::HashSet;

use flow_editor::{Graph, NodeBody, NodeId, Viewport};

use crate::client::FlowClient;
use crate::error::ApiError;
use crate::wire::SavePayload;

/// Trigger kind used when a flow has no trigger node at all.
const MANUAL_TRIGGER: &str = "manual";

pub struct FlowSession {
    client: FlowClient,
    /// Persisted id of the flow being edited; `None` until the first
    /// successful save of a new flow.
    flow_id: Option<String>,
}

impl FlowSession {
    pub fn new(client: FlowClient) -> Self {
        Self {
            client,
            flow_id: None,
        }
    }

    pub fn flow_id(&self) -> Option<&str> {
        self.flow_id.as_deref()
    }

    /// Discards the current flow and unbinds the session from any saved id.
    pub fn new_flow(&mut self, graph: &mut Graph, view: &mut Viewport) {
        graph.reset();
        view.reset();
        self.flow_id = None;
    }

    /// Loads a persisted flow into the session.
    ///
    /// On any fetch/parse failure the existing graph and viewport are left
    /// untouched. On success both are reset, then the graph is hydrated
    /// with the loaded nodes and an edge list filtered down to edges whose
    /// endpoints actually exist (the store does not guarantee integrity).
    /// Returns the flow's name.
    ///
    /// Concurrent loads are not guarded: if two loads race, the last
    /// response to arrive wins.
    pub async fn load(
        &mut self,
        id: &str,
        graph: &mut Graph,
        view: &mut Viewport,
    ) -> Result<String, ApiError> {
        let doc = self.client.fetch(id).await?;

        let known: HashSet<NodeId> = doc.nodes.iter().map(|n| n.id).collect();
        let dropped_before = doc.edges.len();
        let edges: Vec<_> = doc
            .edges
            .into_iter()
            .filter(|e| e.source != e.target && known.contains(&e.source) && known.contains(&e.target))
            .collect();
        if edges.len() < dropped_before {
            tracing::warn!(
                id = %doc.id,
                dropped = dropped_before - edges.len(),
                "dropped edges with missing endpoints while loading"
            );
        }

        graph.reset();
        view.reset();
        graph.hydrate(doc.nodes, edges);
        self.flow_id = Some(doc.id);
        Ok(doc.name)
    }

    /// Persists the graph under `name`, creating or updating depending on
    /// whether the session is already bound to a saved flow.
    ///
    /// Validation failures (empty name, empty graph) are raised locally
    /// without touching the network. The graph itself is never mutated: the
    /// payload is a snapshot taken at call time, so editing may continue
    /// while the request is in flight.
    pub async fn save(&mut self, name: &str, graph: &Graph) -> Result<String, ApiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::Validation(
                "Dê um nome ao fluxo antes de salvar".into(),
            ));
        }
        if graph.nodes.is_empty() {
            return Err(ApiError::Validation(
                "Adicione pelo menos um bloco ao fluxo".into(),
            ));
        }

        let (trigger_type, trigger_value) = derive_trigger(graph);
        let payload = SavePayload {
            name: name.to_string(),
            description: String::new(),
            trigger_type,
            trigger_value,
            nodes: graph.nodes.clone(),
            edges: graph.edges.clone(),
            is_active: true,
        };

        let id = match &self.flow_id {
            Some(id) => self.client.update(id, &payload).await?,
            None => self.client.create(&payload).await?,
        };
        self.flow_id = Some(id.clone());
        Ok(id)
    }
}

/// Derives `(trigger_type, trigger_value)` from the graph's first trigger
/// node: the subtype names the type ("keyword" when unset) and the keyword
/// is the value. A flow with no trigger node saves as a manual trigger.
fn derive_trigger(graph: &Graph) -> (String, String) {
    match graph.trigger() {
        Some(node) => {
            let trigger_type = node
                .subtype
                .clone()
                .unwrap_or_else(|| "keyword".to_string());
            let trigger_value = match &node.body {
                NodeBody::Trigger { keyword, .. } => keyword.clone(),
                _ => String::new(),
            };
            (trigger_type, trigger_value)
        }
        None => (MANUAL_TRIGGER.to_string(), String::new()),
    }
}
