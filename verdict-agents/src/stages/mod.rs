//! The three pipeline stages, run in strict linear order:
//! supporter → critic → judge.

mod critic;
mod judge;
mod supporter;

pub use critic::Critic;
pub use judge::Judge;
pub use supporter::Supporter;

use serde_json::Value;
use tracing::warn;

use verdict_core::traits::IGenerator;

/// Call the generator, substituting the neutral `"{}"` on any failure
/// so the stage always completes.
pub(crate) fn generate_or_neutral(generator: &dyn IGenerator, prompt: &str, stage: &str) -> String {
    match generator.generate(prompt) {
        Ok(text) => text,
        Err(e) => {
            warn!(stage, error = %e, "LLM call failed, substituting neutral response");
            "{}".to_string()
        }
    }
}

pub(crate) fn context_value(context: &Option<String>) -> Value {
    match context {
        Some(text) => Value::String(text.clone()),
        None => Value::Null,
    }
}
