/// Verdict system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default character length of one chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 700;

/// Default character overlap between neighboring chunks.
pub const DEFAULT_CHUNK_OVERLAP: usize = 150;

/// Default number of rule snippets retrieved for the judge.
pub const DEFAULT_TOP_K: usize = 5;

/// Default per-query snippet count for batch retrieval.
pub const DEFAULT_BATCH_TOP_K: usize = 3;

/// Default embedding vector dimensionality.
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;

/// Default vector store collection name. Stable for the lifetime of a
/// process so repeated queries hit the same index.
pub const DEFAULT_COLLECTION_NAME: &str = "debate_rules_chunks";

/// Environment variable holding the LLM provider API key.
pub const LLM_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable holding the web-search provider API key.
pub const SEARCH_API_KEY_ENV: &str = "TAVILY_API_KEY";
