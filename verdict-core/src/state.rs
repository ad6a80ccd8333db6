//! The state record threaded through the agent pipeline.

use serde::Serialize;

use crate::models::{RetrievedDocs, StageOutput};

/// Complete state for one debate run.
///
/// Created with only `claim` and `context` populated; each stage owns
/// writing its own field(s). One record per run, threaded `&mut` through
/// the stages in strict sequence, discarded after the judge writes
/// `final_verdict`. Nothing here is shared between runs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DebateState {
    pub claim: String,
    pub context: Option<String>,
    pub supporter_output: StageOutput,
    pub critic_output: StageOutput,
    pub retrieved_docs: RetrievedDocs,
    pub final_verdict: StageOutput,
}

impl DebateState {
    pub fn new(claim: impl Into<String>, context: Option<String>) -> Self {
        Self {
            claim: claim.into(),
            context,
            ..Self::default()
        }
    }
}
