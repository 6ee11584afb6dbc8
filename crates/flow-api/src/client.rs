//! # HTTP Client
//!
//! Thin async client for the `/flows` API. Transport auth and retries are
//! the host application's concern; this client only speaks the envelope
//! protocol (`{ success, ..., error }`) and maps failures to [`ApiError`].

use crate::error::ApiError;
use crate::wire::{FlowDoc, FlowResponse, FlowSummary, ListResponse, SavePayload, SaveResponse};

pub struct FlowClient {
    http: reqwest::Client,
    base_url: String,
}

impl FlowClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /flows`: all saved flows for the picker.
    pub async fn list(&self) -> Result<Vec<FlowSummary>, ApiError> {
        let resp: ListResponse = self
            .http
            .get(self.url("/flows"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        if !resp.success {
            return Err(rejected(resp.error));
        }
        tracing::debug!(count = resp.flows.len(), "listed flows");
        Ok(resp.flows)
    }

    /// `GET /flows/:id`: one full flow.
    pub async fn fetch(&self, id: &str) -> Result<FlowDoc, ApiError> {
        let resp: FlowResponse = self
            .http
            .get(self.url(&format!("/flows/{id}")))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        match resp.flow {
            Some(flow) if resp.success => {
                tracing::debug!(id = %flow.id, nodes = flow.nodes.len(), "fetched flow");
                Ok(flow)
            }
            _ => Err(rejected(resp.error)),
        }
    }

    /// `POST /flows`: returns the new flow's id.
    pub async fn create(&self, payload: &SavePayload) -> Result<String, ApiError> {
        let resp: SaveResponse = self
            .http
            .post(self.url("/flows"))
            .json(payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        self.saved_id(resp)
    }

    /// `PUT /flows/:id`: returns the flow's id.
    pub async fn update(&self, id: &str, payload: &SavePayload) -> Result<String, ApiError> {
        let resp: SaveResponse = self
            .http
            .put(self.url(&format!("/flows/{id}")))
            .json(payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        self.saved_id(resp)
    }

    fn saved_id(&self, resp: SaveResponse) -> Result<String, ApiError> {
        match resp.flow {
            Some(flow) if resp.success => {
                tracing::info!(id = %flow.id, "flow saved");
                Ok(flow.id)
            }
            _ => Err(rejected(resp.error)),
        }
    }
}

fn rejected(error: Option<String>) -> ApiError {
    ApiError::Rejected(error.unwrap_or_else(|| "unknown server error".into()))
}
