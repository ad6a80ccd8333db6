//! Topic classifier tool: one topic label per claim, via the generator.

use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use verdict_core::traits::{EvidenceContext, IEvidenceTool, IGenerator};

const TOPICS: &str =
    "technology, science, economics, politics, environment, ethics, education, health";
const UNKNOWN: &str = "unknown";

pub struct TopicClassifier {
    generator: Arc<dyn IGenerator>,
}

impl TopicClassifier {
    pub fn new(generator: Arc<dyn IGenerator>) -> Self {
        Self { generator }
    }
}

impl IEvidenceTool for TopicClassifier {
    fn name(&self) -> &str {
        "topic_classifier"
    }

    fn run(&self, claim: &str, _ctx: &mut EvidenceContext) -> Value {
        let prompt = format!(
            "Classify the following claim into one topic category:\n[{TOPICS}].\n\n\
             Claim: {claim}\n\nReturn ONLY the topic word."
        );

        match self.generator.generate(&prompt) {
            Ok(label) => Value::String(label.trim().to_lowercase()),
            Err(e) => {
                warn!(error = %e, "topic classification failed");
                Value::String(UNKNOWN.to_string())
            }
        }
    }
}
