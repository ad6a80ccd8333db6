//! Evidence tools and their registry.
//!
//! Each tool is a typed `IEvidenceTool` looked up through an explicit
//! registry; the per-role ordered tool lists come from configuration.

mod encyclopedia;
mod news_summary;
mod topic_classifier;
mod web_search;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use verdict_core::constants;
use verdict_core::errors::PipelineResult;
use verdict_core::traits::{EvidenceContext, IEvidenceTool, IGenerator};

pub use encyclopedia::Encyclopedia;
pub use news_summary::NewsSummary;
pub use topic_classifier::TopicClassifier;
pub use web_search::WebSearch;

/// Explicit mapping from tool name to implementation.
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Box<dyn IEvidenceTool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the four standard tools. The web-search key is
    /// read from the environment; its absence degrades that tool
    /// rather than failing construction.
    pub fn with_defaults(generator: Arc<dyn IGenerator>) -> PipelineResult<Self> {
        let search_key = std::env::var(constants::SEARCH_API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty());

        let mut registry = Self::new();
        registry.register(Box::new(WebSearch::new(search_key)?));
        registry.register(Box::new(Encyclopedia::new()?));
        registry.register(Box::new(NewsSummary::new(Arc::clone(&generator))));
        registry.register(Box::new(TopicClassifier::new(generator)));
        Ok(registry)
    }

    pub fn register(&mut self, tool: Box<dyn IEvidenceTool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn get(&self, name: &str) -> Option<&dyn IEvidenceTool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    /// Run the named tools in order against the claim, sharing one
    /// evidence context. Unknown names yield null and a warning.
    pub fn run_all(&self, names: &[String], claim: &str) -> BTreeMap<String, Value> {
        let mut ctx = EvidenceContext::default();
        let mut outputs = BTreeMap::new();
        for name in names {
            let output = match self.get(name) {
                Some(tool) => tool.run(claim, &mut ctx),
                None => {
                    warn!(tool = %name, "unknown evidence tool");
                    Value::Null
                }
            };
            outputs.insert(name.clone(), output);
        }
        outputs
    }
}
