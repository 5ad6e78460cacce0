// src/knowledge/mod.rs
// Client for the MediaWiki query API: page extracts, associated image
// titles, and direct image URLs.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::CONFIG;
use crate::error::{ResolveError, ResolveResult};

/// Page key the API uses when a raw (unresolved) title is supplied.
const RAW_TITLE_PAGE_KEY: &str = "-1";

/// Extract and candidate image titles for one page.
///
/// A title with no matching page yields an empty extract and an empty
/// candidate list rather than an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSummary {
    pub page_id: String,
    pub extract: String,
    pub image_titles: Vec<String>,
}

pub struct WikiClient {
    client: Client,
    api_url: String,
}

impl WikiClient {
    pub fn new() -> ResolveResult<Self> {
        let client = Client::builder()
            .timeout(CONFIG.request_timeout())
            .user_agent(CONFIG.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            api_url: CONFIG.wiki_api_url.clone(),
        })
    }

    /// Build against an explicit API endpoint instead of the configured one.
    pub fn with_api_url(api_url: impl Into<String>) -> ResolveResult<Self> {
        let mut wiki = Self::new()?;
        wiki.api_url = api_url.into();
        Ok(wiki)
    }

    /// Fetch the intro extract and associated image titles for `title`.
    /// Redirects are resolved server-side. One attempt, no retry.
    pub async fn fetch_summary(&self, title: &str) -> ResolveResult<PageSummary> {
        let url = format!(
            "{}?format=json&action=query&prop=extracts%7Cimages&imlimit=max\
             &exintro&explaintext&indexpageids&redirects=1&titles={}",
            self.api_url,
            urlencoding::encode(title)
        );

        let doc = self.get_json(&url).await?;
        let summary = parse_summary(&doc);

        debug!(
            title,
            page_id = %summary.page_id,
            candidates = summary.image_titles.len(),
            "fetched page summary"
        );

        Ok(summary)
    }

    /// Fetch the direct URL for one specific image title. Returns `None`
    /// when the API has no entry for it.
    pub async fn fetch_image_url(&self, image_title: &str) -> ResolveResult<Option<String>> {
        let url = format!(
            "{}?format=json&action=query&prop=imageinfo&iiprop=url&titles={}",
            self.api_url,
            urlencoding::encode(image_title)
        );

        let doc = self.get_json(&url).await?;
        Ok(parse_image_url(&doc))
    }

    async fn get_json(&self, url: &str) -> ResolveResult<Value> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ResolveError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ResolveError::Network(format!(
                "knowledge API returned {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ResolveError::Network(e.to_string()))?;

        // Invalid JSON is a Parse error; valid JSON with missing keys is
        // handled by the parse helpers, which degrade instead of failing.
        Ok(serde_json::from_str(&body)?)
    }
}

/// Read `query.pageids[0]` / `query.pages[<id>]` into a `PageSummary`.
/// An empty page-id list means "no page found" and yields the default
/// (empty) summary. Image entries without a string `title` are skipped.
fn parse_summary(doc: &Value) -> PageSummary {
    let query = &doc["query"];

    let Some(page_id) = query["pageids"].get(0).and_then(page_id_string) else {
        return PageSummary::default();
    };

    let page = &query["pages"][page_id.as_str()];

    let extract = page["extract"].as_str().unwrap_or("").to_string();

    let image_titles = page["images"]
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry["title"].as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    PageSummary {
        page_id,
        extract,
        image_titles,
    }
}

/// Read `query.pages["-1"].imageinfo[0].url`. The API keys the result under
/// the literal page id "-1" because the lookup is by raw title.
fn parse_image_url(doc: &Value) -> Option<String> {
    doc["query"]["pages"][RAW_TITLE_PAGE_KEY]["imageinfo"][0]["url"]
        .as_str()
        .map(str::to_string)
}

/// Page ids arrive as strings with `indexpageids`, but tolerate numbers.
fn page_id_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::to_string)
        .or_else(|| value.as_i64().map(|n| n.to_string()))
}
