/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("invalid chunking parameters: chunk_size {chunk_size}, overlap {overlap} (overlap must be smaller)")]
    InvalidChunking { chunk_size: usize, overlap: usize },

    #[error("chunks file not found: {path}")]
    ChunksNotFound { path: String },

    #[error("malformed chunks file {path}: {reason}")]
    MalformedChunks { path: String, reason: String },
}
