//! Web-search evidence tool (Tavily).

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

use verdict_core::errors::{PipelineError, PipelineResult};
use verdict_core::traits::{EvidenceContext, IEvidenceTool};

const SEARCH_ENDPOINT: &str = "https://api.tavily.com/search";
const MAX_RESULTS: usize = 5;

/// Structured web search. Without a key it returns an empty result set
/// and a warning instead of failing the stage.
pub struct WebSearch {
    api_key: Option<String>,
    client: Client,
}

#[derive(Serialize)]
struct SearchPayload<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: usize,
}

impl WebSearch {
    pub fn new(api_key: Option<String>) -> PipelineResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .map_err(|e| PipelineError::Generation {
                reason: format!("failed to build search HTTP client: {e}"),
            })?;
        Ok(Self { api_key, client })
    }

    fn search(&self, key: &str, query: &str) -> Result<Value, String> {
        let resp = self
            .client
            .post(SEARCH_ENDPOINT)
            .json(&SearchPayload {
                api_key: key,
                query,
                max_results: MAX_RESULTS,
            })
            .send()
            .map_err(|e| e.to_string())?;

        let data: Value = resp.json().map_err(|e| e.to_string())?;

        let cleaned: Vec<Value> = data["results"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .map(|item| {
                        json!({
                            "title": item["title"].as_str().unwrap_or(""),
                            "url": item["url"].as_str().unwrap_or(""),
                            "content": item["content"].as_str().unwrap_or(""),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Value::Array(cleaned))
    }
}

impl IEvidenceTool for WebSearch {
    fn name(&self) -> &str {
        "web_search"
    }

    fn run(&self, claim: &str, ctx: &mut EvidenceContext) -> Value {
        let results = match &self.api_key {
            None => {
                warn!("web search API key missing, returning no results");
                json!([])
            }
            Some(key) => match self.search(key, claim) {
                Ok(results) => results,
                Err(reason) => {
                    warn!(%reason, "web search failed");
                    json!([])
                }
            },
        };

        // Cache for the news summary tool running later in the stage.
        ctx.web_search_cache = Some(results.clone());
        results
    }
}
