//! The sequential debate pipeline.
//!
//! Strict linear order, no branching, no retries:
//! supporter → critic → judge → done. Each stage reads and extends the
//! one state record for the run.

use std::sync::Arc;

use tracing::info;

use verdict_core::config::PipelineConfig;
use verdict_core::errors::VerdictResult;
use verdict_core::state::DebateState;
use verdict_core::traits::IGenerator;
use verdict_retrieval::Retriever;

use crate::prompts::PromptSet;
use crate::stages::{Critic, Judge, Supporter};
use crate::tools::ToolRegistry;

/// One fully wired debate pipeline. All collaborators are injected;
/// nothing here is global, so concurrent callers can each own one.
pub struct DebatePipeline {
    config: PipelineConfig,
    prompts: PromptSet,
    registry: ToolRegistry,
    generator: Arc<dyn IGenerator>,
    retriever: Retriever,
}

impl DebatePipeline {
    pub fn new(
        config: PipelineConfig,
        prompts: PromptSet,
        registry: ToolRegistry,
        generator: Arc<dyn IGenerator>,
        retriever: Retriever,
    ) -> Self {
        Self {
            config,
            prompts,
            registry,
            generator,
            retriever,
        }
    }

    /// Run the full debate and return the final state.
    ///
    /// Provider-side failures degrade inside the stages; only missing
    /// setup artifacts (chunks file) propagate as errors.
    pub fn run_debate(&mut self, claim: &str, context: Option<String>) -> VerdictResult<DebateState> {
        info!(claim, "debate run started");
        let mut state = DebateState::new(claim, context);

        Supporter {
            registry: &self.registry,
            generator: self.generator.as_ref(),
            template: &self.prompts.supporter,
            tool_names: &self.config.tools.supporter,
        }
        .run(&mut state);
        info!(degraded = state.supporter_output.is_degraded(), "supporter stage complete");

        Critic {
            registry: &self.registry,
            generator: self.generator.as_ref(),
            template: &self.prompts.critic,
            tool_names: &self.config.tools.critic,
        }
        .run(&mut state);
        info!(degraded = state.critic_output.is_degraded(), "critic stage complete");

        Judge {
            retriever: &mut self.retriever,
            generator: self.generator.as_ref(),
            template: &self.prompts.judge,
            top_k: self.config.top_k,
        }
        .run(&mut state)?;
        info!(degraded = state.final_verdict.is_degraded(), "judge stage complete");

        Ok(state)
    }
}
