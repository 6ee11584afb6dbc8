//! # flow_api
//!
//! Persistence layer for `flow_editor` graphs: wire types for the `/flows`
//! REST API, an async HTTP client, and a [`FlowSession`] that binds an
//! editing session to a persisted flow (create vs. update, trigger
//! derivation, local validation, defensive hydration).
//!
//! The editor's in-memory node/edge structs serialize directly as the wire
//! format; no separate DTO layer exists.

pub mod client;
pub mod error;
pub mod session;
pub mod wire;

pub use client::FlowClient;
pub use error::ApiError;
pub use session::FlowSession;
pub use wire::{FlowDoc, FlowSummary, NodeCount, SavePayload};
