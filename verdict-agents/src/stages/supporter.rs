//! Supporter stage: gathers pro evidence and argues for the claim.

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};
use tracing::debug;

use verdict_core::models::{RetrievedDocs, StageOutput};
use verdict_core::state::DebateState;
use verdict_core::traits::IGenerator;

use crate::stages::{context_value, generate_or_neutral};
use crate::template;
use crate::tools::ToolRegistry;

/// Runs the configured evidence tools, then asks the LLM to build the
/// strongest case for the claim.
pub struct Supporter<'a> {
    pub registry: &'a ToolRegistry,
    pub generator: &'a dyn IGenerator,
    pub template: &'a str,
    pub tool_names: &'a [String],
}

impl Supporter<'_> {
    pub fn run(&self, state: &mut DebateState) {
        debug!(tools = self.tool_names.len(), "supporter gathering evidence");
        let evidence = self.registry.run_all(self.tool_names, &state.claim);
        let evidence_value = Value::Object(Map::from_iter(evidence.clone()));
        state.retrieved_docs = RetrievedDocs::Evidence(evidence);

        let mut vars: BTreeMap<&str, Value> = BTreeMap::new();
        vars.insert("claim", Value::String(state.claim.clone()));
        vars.insert("context", context_value(&state.context));
        vars.insert("retrieved_docs", evidence_value);

        let prompt = template::render(self.template, &vars);
        let response = generate_or_neutral(self.generator, &prompt, "supporter");
        state.supporter_output = StageOutput::parse_or(&response, json!({"pros": []}));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_core::errors::PipelineResult;

    struct FixedGenerator(&'static str);

    impl IGenerator for FixedGenerator {
        fn generate(&self, _prompt: &str) -> PipelineResult<String> {
            Ok(self.0.to_string())
        }

        fn is_available(&self) -> bool {
            true
        }
    }

    fn run_with_response(response: &'static str) -> DebateState {
        let mut state = DebateState::new("The earth is round", None);
        Supporter {
            registry: &ToolRegistry::new(),
            generator: &FixedGenerator(response),
            template: "{{claim}} {{context}} {{retrieved_docs}}",
            tool_names: &[],
        }
        .run(&mut state);
        state
    }

    #[test]
    fn valid_json_becomes_supporter_output() {
        let state = run_with_response(r#"{"pros": ["evidence a"]}"#);
        assert!(!state.supporter_output.is_degraded());
        assert_eq!(state.supporter_output.value(), &json!({"pros": ["evidence a"]}));
    }

    #[test]
    fn non_json_response_falls_back_to_empty_pros() {
        let state = run_with_response("the claim seems very plausible to me");
        assert!(state.supporter_output.is_degraded());
        assert_eq!(state.supporter_output.value(), &json!({"pros": []}));
    }

    #[test]
    fn evidence_lands_in_retrieved_docs() {
        let mut state = DebateState::new("claim", None);
        let mut registry = ToolRegistry::new();
        struct Canned;
        impl verdict_core::traits::IEvidenceTool for Canned {
            fn name(&self) -> &str {
                "canned"
            }
            fn run(
                &self,
                _claim: &str,
                _ctx: &mut verdict_core::traits::EvidenceContext,
            ) -> Value {
                json!({"hit": true})
            }
        }
        registry.register(Box::new(Canned));

        Supporter {
            registry: &registry,
            generator: &FixedGenerator("{}"),
            template: "{{retrieved_docs}}",
            tool_names: &["canned".to_string()],
        }
        .run(&mut state);

        match &state.retrieved_docs {
            RetrievedDocs::Evidence(map) => assert_eq!(map["canned"], json!({"hit": true})),
            RetrievedDocs::Rules(_) => panic!("expected evidence"),
        }
    }
}
