use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::RetrievedSnippet;

/// What currently backs the `retrieved_docs` field of the debate state.
///
/// Supporter and critic write tool outputs keyed by tool name; the judge
/// then overwrites the field with the rule snippets it retrieved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RetrievedDocs {
    Evidence(BTreeMap<String, Value>),
    Rules(Vec<RetrievedSnippet>),
}

impl Default for RetrievedDocs {
    fn default() -> Self {
        Self::Evidence(BTreeMap::new())
    }
}

impl RetrievedDocs {
    /// The rule snippets, if the judge has already run.
    pub fn rules(&self) -> Option<&[RetrievedSnippet]> {
        match self {
            Self::Rules(snippets) => Some(snippets),
            Self::Evidence(_) => None,
        }
    }
}
