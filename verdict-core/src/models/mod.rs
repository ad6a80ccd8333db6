//! Shared data model types.

mod chunk;
mod retrieved_docs;
mod snippet;
mod stage_output;

pub use chunk::Chunk;
pub use retrieved_docs::RetrievedDocs;
pub use snippet::RetrievedSnippet;
pub use stage_output::StageOutput;
