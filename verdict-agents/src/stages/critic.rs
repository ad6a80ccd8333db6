//! Critic stage: mirrors the supporter with counter evidence.

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};
use tracing::debug;

use verdict_core::models::{RetrievedDocs, StageOutput};
use verdict_core::state::DebateState;
use verdict_core::traits::IGenerator;

use crate::stages::{context_value, generate_or_neutral};
use crate::template;
use crate::tools::ToolRegistry;

/// Structurally identical to the supporter, but argues against the
/// claim and writes `critic_output` with a `{"cons": []}` fallback.
pub struct Critic<'a> {
    pub registry: &'a ToolRegistry,
    pub generator: &'a dyn IGenerator,
    pub template: &'a str,
    pub tool_names: &'a [String],
}

impl Critic<'_> {
    pub fn run(&self, state: &mut DebateState) {
        debug!(tools = self.tool_names.len(), "critic gathering evidence");
        let evidence = self.registry.run_all(self.tool_names, &state.claim);
        let evidence_value = Value::Object(Map::from_iter(evidence.clone()));
        state.retrieved_docs = RetrievedDocs::Evidence(evidence);

        let mut vars: BTreeMap<&str, Value> = BTreeMap::new();
        vars.insert("claim", Value::String(state.claim.clone()));
        vars.insert("context", context_value(&state.context));
        vars.insert("retrieved_docs", evidence_value);

        let prompt = template::render(self.template, &vars);
        let response = generate_or_neutral(self.generator, &prompt, "critic");
        state.critic_output = StageOutput::parse_or(&response, json!({"cons": []}));
    }
}
