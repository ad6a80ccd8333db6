use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RagConfig {
    /// Directory where the vector store persists its data.
    pub persist_directory: PathBuf,
    /// Collection name inside the store. Must stay stable for the
    /// lifetime of a process.
    pub collection_name: String,
    /// Path to the precomputed chunks JSON file.
    pub chunks_path: PathBuf,
    /// Character length of one chunk.
    pub chunk_size: usize,
    /// Character overlap between neighboring chunks. Must be smaller
    /// than `chunk_size`.
    pub overlap: usize,
    /// Embedding vector dimensionality.
    pub embedding_dimensions: usize,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            persist_directory: PathBuf::from(defaults::DEFAULT_PERSIST_DIRECTORY),
            collection_name: constants::DEFAULT_COLLECTION_NAME.to_string(),
            chunks_path: PathBuf::from(defaults::DEFAULT_CHUNKS_PATH),
            chunk_size: constants::DEFAULT_CHUNK_SIZE,
            overlap: constants::DEFAULT_CHUNK_OVERLAP,
            embedding_dimensions: constants::DEFAULT_EMBEDDING_DIMENSIONS,
        }
    }
}
