// src/resolver/mod.rs
// Top-level orchestration: classify -> summary -> disambiguate -> image URL.

use std::sync::Arc;

use tracing::{info, warn};

use crate::classifier::Classifier;
use crate::disambig::select_image;
use crate::error::{ResolveError, ResolveResult};
use crate::knowledge::{PageSummary, WikiClient};

/// Pipeline stage names, carried in log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Classifying,
    SummaryFetch,
    Disambiguating,
    ImageFetch,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Classifying => "classifying",
            Stage::SummaryFetch => "summary_fetch",
            Stage::Disambiguating => "disambiguating",
            Stage::ImageFetch => "image_fetch",
        }
    }
}

/// Terminal artifact of one resolution run.
///
/// `image_url` is `None` when no candidate image matched or its URL lookup
/// failed; the caller is expected to show a placeholder in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInfo {
    /// Display title: the classifier label, word-capitalized.
    pub title: String,
    /// Best-effort page extract; may be empty.
    pub description: String,
    pub image_url: Option<String>,
}

pub struct Resolver {
    classifier: Arc<dyn Classifier>,
    wiki: WikiClient,
}

impl Resolver {
    pub fn new(classifier: Arc<dyn Classifier>, wiki: WikiClient) -> Self {
        Self { classifier, wiki }
    }

    /// Run one resolution over raw image bytes.
    ///
    /// Classification failure is fatal. Knowledge lookups degrade: a failed
    /// summary fetch yields an empty description, a failed image-URL fetch
    /// yields a placeholder result. The two network calls are strictly
    /// sequential since the second depends on the first. Dropping the
    /// returned future cancels whatever call is in flight.
    pub async fn resolve(&self, image: &[u8]) -> ResolveResult<ResolvedInfo> {
        info!(
            stage = Stage::Classifying.as_str(),
            classifier = self.classifier.name(),
            bytes = image.len(),
            "starting resolution"
        );

        let ranked = self.classifier.classify(image).await?;
        let label = ranked
            .first()
            .map(|c| c.label.clone())
            .ok_or_else(|| {
                ResolveError::Classification("classifier produced no predictions".to_string())
            })?;

        let summary = match self.wiki.fetch_summary(&label).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!(
                    stage = Stage::SummaryFetch.as_str(),
                    label, error = %e,
                    "summary fetch failed, continuing without extract"
                );
                PageSummary::default()
            }
        };

        let chosen = select_image(&label, &summary.image_titles);
        info!(
            stage = Stage::Disambiguating.as_str(),
            label,
            candidates = summary.image_titles.len(),
            chosen = chosen.unwrap_or("<none>"),
            "selected candidate image"
        );

        let image_url = match chosen {
            Some(title) => match self.wiki.fetch_image_url(title).await {
                Ok(url) => url,
                Err(e) => {
                    warn!(
                        stage = Stage::ImageFetch.as_str(),
                        title, error = %e,
                        "image URL fetch failed, falling back to placeholder"
                    );
                    None
                }
            },
            None => None,
        };

        Ok(ResolvedInfo {
            title: title_case(&label),
            description: summary.extract,
            image_url,
        })
    }
}

/// Word-wise capitalization for display, matching how labels like
/// "golden retriever" are conventionally titled.
fn title_case(label: &str) -> String {
    label
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
