use serde::{Deserialize, Serialize};

/// A query-time projection of a stored chunk plus its distance to the
/// query. Ephemeral: produced by a similarity search, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedSnippet {
    pub id: String,
    pub text: String,
    /// Cosine distance to the query; smaller is more similar.
    pub distance: f64,
}
