//! # verdict-embeddings
//!
//! The fixed embedding model backing the vector store: a deterministic
//! hashed term-frequency provider. No model downloads, no network — the
//! same text always maps to the same vector, which is what the retrieval
//! contract needs (self-retrieval must rank first).

mod provider;

pub use provider::HashedTermFrequency;
