//! Encyclopedia lookup tool: the summary paragraph of a Wikipedia page.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::{json, Value};
use tracing::warn;

use verdict_core::errors::{PipelineError, PipelineResult};
use verdict_core::traits::{EvidenceContext, IEvidenceTool};

const SUMMARY_ENDPOINT: &str = "https://en.wikipedia.org/api/rest_v1/page/summary/";
/// The one external call with a fixed short deadline.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(6);

/// Wikipedia page-summary lookup. Any failure degrades to `{}`.
pub struct Encyclopedia {
    client: Client,
}

impl Encyclopedia {
    pub fn new() -> PipelineResult<Self> {
        let client = Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .map_err(|e| PipelineError::Generation {
                reason: format!("failed to build encyclopedia HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }

    fn lookup(&self, topic: &str) -> Result<Value, String> {
        let slug = topic.replace(' ', "_");
        let resp = self
            .client
            .get(format!("{SUMMARY_ENDPOINT}{slug}"))
            .send()
            .map_err(|e| e.to_string())?;

        if resp.status() != reqwest::StatusCode::OK {
            return Ok(json!({}));
        }

        let data: Value = resp.json().map_err(|e| e.to_string())?;
        Ok(json!({
            "title": data["title"].as_str().unwrap_or(""),
            "extract": data["extract"].as_str().unwrap_or(""),
            "url": data["content_urls"]["desktop"]["page"].as_str().unwrap_or(""),
        }))
    }
}

impl IEvidenceTool for Encyclopedia {
    fn name(&self) -> &str {
        "encyclopedia"
    }

    fn run(&self, claim: &str, _ctx: &mut EvidenceContext) -> Value {
        match self.lookup(claim) {
            Ok(summary) => summary,
            Err(reason) => {
                warn!(%reason, "encyclopedia lookup failed");
                json!({})
            }
        }
    }
}
