use thiserror::Error;

/// Errors surfaced by the persistence layer.
///
/// `Validation` never reaches the network: it is raised locally and the
/// in-memory graph is left exactly as it was. `Rejected` carries the
/// server's own error string from a `success: false` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server rejected the request: {0}")]
    Rejected(String),
    #[error("{0}")]
    Validation(String),
}
