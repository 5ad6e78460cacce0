// src/classifier/http.rs
// Adapter for an external HTTP inference endpoint serving a pre-trained
// image classifier.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::CONFIG;
use crate::error::{ResolveError, ResolveResult};

use super::{Classification, Classifier};

pub struct HttpClassifier {
    client: Client,
    endpoint: String,
    top_k: usize,
}

#[derive(Debug, Deserialize)]
struct InferenceResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    label: String,
    confidence: f32,
}

impl HttpClassifier {
    pub fn new() -> ResolveResult<Self> {
        let client = Client::builder()
            .timeout(CONFIG.request_timeout())
            .user_agent(CONFIG.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            endpoint: CONFIG.inference_url.clone(),
            top_k: CONFIG.classify_top_k,
        })
    }

    /// Build against an explicit endpoint instead of the configured one.
    pub fn with_endpoint(endpoint: impl Into<String>) -> ResolveResult<Self> {
        let mut classifier = Self::new()?;
        classifier.endpoint = endpoint.into();
        Ok(classifier)
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    fn name(&self) -> &'static str {
        "http-inference"
    }

    async fn classify(&self, image: &[u8]) -> ResolveResult<Vec<Classification>> {
        // Reject garbage input before spending a network round trip; the
        // inference endpoint would refuse it anyway.
        image::load_from_memory(image)
            .map_err(|e| ResolveError::Classification(format!("cannot decode image: {e}")))?;

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/octet-stream")
            .query(&[("top_k", self.top_k.to_string())])
            .body(image.to_vec())
            .send()
            .await
            .map_err(|e| ResolveError::Classification(format!("inference request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ResolveError::Classification(format!(
                "inference endpoint returned {}",
                response.status()
            )));
        }

        let parsed: InferenceResponse = response
            .json()
            .await
            .map_err(|e| ResolveError::Classification(format!("bad inference response: {e}")))?;

        let mut results: Vec<Classification> = parsed
            .predictions
            .into_iter()
            .filter(|p| !p.label.is_empty())
            .map(|p| Classification {
                label: p.label,
                confidence: p.confidence.clamp(0.0, 1.0),
            })
            .collect();

        if results.is_empty() {
            return Err(ResolveError::Classification(
                "classifier produced no predictions".to_string(),
            ));
        }

        // The contract is descending confidence; do not trust the endpoint.
        results.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        debug!(
            label = %results[0].label,
            confidence = results[0].confidence,
            "classified image"
        );

        Ok(results)
    }
}
