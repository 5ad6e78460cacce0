// src/classifier/mod.rs
// Classifier port: image bytes in, ranked labels out.

pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ResolveResult;

pub use http::HttpClassifier;

/// One ranked prediction from the classifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Classification {
    /// Predicted object name, used verbatim as the knowledge-base query title.
    pub label: String,
    /// Confidence in [0, 1].
    pub confidence: f32,
}

/// Image classification capability.
///
/// Implementations must return predictions sorted by descending confidence
/// and fail with `ResolveError::Classification` when the input cannot be
/// decoded or no prediction is produced. The orchestrator consumes only the
/// first element.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Adapter name for logging.
    fn name(&self) -> &'static str;

    async fn classify(&self, image: &[u8]) -> ResolveResult<Vec<Classification>>;
}
