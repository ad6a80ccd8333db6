//! Judge stage: grounds the verdict in retrieved fallacy rules.

use std::collections::BTreeMap;

use serde_json::{json, Value};
use tracing::debug;

use verdict_core::errors::VerdictResult;
use verdict_core::models::{RetrievedDocs, StageOutput};
use verdict_core::state::DebateState;
use verdict_core::traits::IGenerator;
use verdict_retrieval::Retriever;

use crate::stages::{context_value, generate_or_neutral};
use crate::template;

/// Retrieves rule snippets for the claim, weighs both arguments, and
/// writes the final verdict.
pub struct Judge<'a> {
    pub retriever: &'a mut Retriever,
    pub generator: &'a dyn IGenerator,
    pub template: &'a str,
    pub top_k: usize,
}

impl Judge<'_> {
    /// Fallback verdict on malformed LLM output.
    fn fallback_verdict() -> Value {
        json!({"final_recommendation": "Undecided", "confidence": 0})
    }

    pub fn run(&mut self, state: &mut DebateState) -> VerdictResult<()> {
        let snippets = self.retriever.retrieve_relevant(&state.claim, self.top_k)?;
        debug!(snippets = snippets.len(), "judge retrieved rule snippets");
        let snippets_value = serde_json::to_value(&snippets)?;
        state.retrieved_docs = RetrievedDocs::Rules(snippets);

        let mut vars: BTreeMap<&str, Value> = BTreeMap::new();
        vars.insert("claim", Value::String(state.claim.clone()));
        vars.insert("context", context_value(&state.context));
        vars.insert("supporter_output", state.supporter_output.value().clone());
        vars.insert("critic_output", state.critic_output.value().clone());
        vars.insert("retrieved_docs", snippets_value);

        let prompt = template::render(self.template, &vars);
        let response = generate_or_neutral(self.generator, &prompt, "judge");
        state.final_verdict = StageOutput::parse_or(&response, Self::fallback_verdict());
        Ok(())
    }
}
