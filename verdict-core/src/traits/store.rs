use crate::errors::VerdictResult;
use crate::models::{Chunk, RetrievedSnippet};

/// A persisted vector index over chunks, queryable by nearest neighbor.
///
/// `Sync` is deliberately not required: the design is single-threaded
/// and interleaved ingestion from multiple threads is not supported.
pub trait IChunkStore: Send {
    /// Embed and upsert the given chunks. Persists immediately.
    fn add_chunks(&self, chunks: &[Chunk]) -> VerdictResult<()>;

    /// Nearest-neighbor search, ordered by ascending distance.
    /// An empty store yields an empty result, never an error.
    fn query(&self, text: &str, top_k: usize) -> VerdictResult<Vec<RetrievedSnippet>>;

    /// Number of chunks currently stored.
    fn len(&self) -> VerdictResult<usize>;

    fn is_empty(&self) -> VerdictResult<bool> {
        Ok(self.len()? == 0)
    }
}
