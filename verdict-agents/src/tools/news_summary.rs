//! News summary tool: condenses cached web-search results into short
//! factual bullet points through the generator.

use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use verdict_core::traits::{EvidenceContext, IEvidenceTool, IGenerator};

const NO_NEWS: &str = "No relevant news found.";
const UNAVAILABLE: &str = "Summary unavailable.";

pub struct NewsSummary {
    generator: Arc<dyn IGenerator>,
}

impl NewsSummary {
    pub fn new(generator: Arc<dyn IGenerator>) -> Self {
        Self { generator }
    }

    fn combined_content(evidence: &Value) -> String {
        evidence
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item["content"].as_str())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default()
    }
}

impl IEvidenceTool for NewsSummary {
    fn name(&self) -> &str {
        "news_summary"
    }

    fn run(&self, _claim: &str, ctx: &mut EvidenceContext) -> Value {
        let combined = ctx
            .web_search_cache
            .as_ref()
            .map(Self::combined_content)
            .unwrap_or_default();

        if combined.trim().is_empty() {
            return Value::String(NO_NEWS.to_string());
        }

        let prompt = format!(
            "Summarize the following information into 3-5 concise bullet points.\n\
             Focus on facts only. Avoid opinions.\n\nTEXT:\n{combined}"
        );

        match self.generator.generate(&prompt) {
            Ok(summary) => Value::String(summary),
            Err(e) => {
                warn!(error = %e, "news summary generation failed");
                Value::String(UNAVAILABLE.to_string())
            }
        }
    }
}
