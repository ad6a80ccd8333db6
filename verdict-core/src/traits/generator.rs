use crate::errors::PipelineResult;

/// Black-box LLM call: prompt in, completion text out.
pub trait IGenerator: Send + Sync {
    /// Generate a completion for the prompt.
    fn generate(&self, prompt: &str) -> PipelineResult<String>;

    /// Whether the provider can be called at all (e.g. credentials set).
    fn is_available(&self) -> bool;
}
