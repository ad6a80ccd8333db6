//! Error types, one enum per subsystem plus the umbrella `VerdictError`.

mod pipeline_error;
mod retrieval_error;
mod storage_error;

pub use pipeline_error::PipelineError;
pub use retrieval_error::RetrievalError;
pub use storage_error::StorageError;

/// Umbrella error for the whole workspace.
#[derive(Debug, thiserror::Error)]
pub enum VerdictError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {reason}")]
    Config { reason: String },
}

/// Workspace-wide result alias.
pub type VerdictResult<T> = Result<T, VerdictError>;

/// Result alias for generator and tool seams, which carry only
/// pipeline-domain failures.
pub type PipelineResult<T> = Result<T, PipelineError>;
