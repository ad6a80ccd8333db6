//! # verdict-core
//!
//! Foundation crate for the Verdict debate advisor.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod state;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VerdictConfig;
pub use errors::{PipelineResult, VerdictError, VerdictResult};
pub use models::{Chunk, RetrievedDocs, RetrievedSnippet, StageOutput};
pub use state::DebateState;
