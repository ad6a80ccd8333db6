/// Agent-pipeline errors.
///
/// Provider and credential failures are caught at their call sites and
/// degraded to neutral values; only missing local setup artifacts
/// (prompt files) are allowed to abort a run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("prompt template not found: {path}")]
    PromptNotFound { path: String },

    #[error("missing credential: {env_var} is not set")]
    MissingCredential { env_var: String },

    #[error("generation failed: {reason}")]
    Generation { reason: String },
}
