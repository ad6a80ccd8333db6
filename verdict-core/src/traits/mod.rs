//! Trait seams between the workspace crates.

mod embedding;
mod generator;
mod store;
mod tool;

pub use embedding::IEmbeddingProvider;
pub use generator::IGenerator;
pub use store::IChunkStore;
pub use tool::{EvidenceContext, IEvidenceTool};
