use serde::{Deserialize, Serialize};

/// One fixed-size, possibly overlapping substring unit prepared for
/// embedding. Ids are sequential (`chunk_0`, `chunk_1`, ...) and unique
/// within one ingestion batch; a chunk is immutable once persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: String,
    pub text: String,
}

impl Chunk {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            id: format!("chunk_{index}"),
            text: text.into(),
        }
    }
}
