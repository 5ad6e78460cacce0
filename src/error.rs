// src/error.rs
// Error taxonomy for a resolution run.

use thiserror::Error;

pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors produced by the resolution pipeline.
///
/// Only `Classification` aborts a run. `Network` and `Parse` are fatal when
/// they occur inside the classifier adapter, but the orchestrator downgrades
/// them to empty/absent results when they come out of the knowledge client.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The classifier could not produce a usable label. Always fatal.
    #[error("classification failed: {0}")]
    Classification(String),

    /// Transport-level failure: timeout, DNS, connection, non-2xx status.
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not valid JSON.
    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ResolveError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest surfaces body-decode failures through the same error type;
        // everything else on this path is transport.
        if e.is_decode() {
            ResolveError::Network(format!("undecodable body: {e}"))
        } else {
            ResolveError::Network(e.to_string())
        }
    }
}
